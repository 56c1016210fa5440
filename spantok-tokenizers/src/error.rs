use thiserror::Error;

use super::config::TokenizerConfigError;

#[derive(Error, Debug)]
pub enum TokenizerError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] TokenizerConfigError),
    #[error("Invalid tokenizer mode `{0}`. Must be \"word\" or \"char\"")]
    InvalidMode(String),
    #[error("Failed to parse input into token ids: {0}")]
    ParseError(String),
}
