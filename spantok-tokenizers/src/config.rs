use std::fmt::Display;
use std::fs::read_to_string;
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;

use serde::{Deserialize, Serialize};

use super::error::TokenizerError;

pub const DEFAULT_VOCAB_SIZE: usize = 1000;

///
/// Unit granularity of a tokenizer. Switching between modes invalidates any
/// vocabulary learned under the other one.
///
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TokenizerMode {
    #[default]
    Word,
    Char,
}

impl TokenizerMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenizerMode::Word => "word",
            TokenizerMode::Char => "char",
        }
    }
}

impl Display for TokenizerMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TokenizerMode {
    type Err = TokenizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "word" => Ok(TokenizerMode::Word),
            "char" => Ok(TokenizerMode::Char),
            other => Err(TokenizerError::InvalidMode(other.to_string())),
        }
    }
}

impl TryFrom<&str> for TokenizerMode {
    type Error = TokenizerError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Deserialize, Serialize, Debug, PartialEq, Default)]
pub struct TokenizerConfig {
    pub mode: Option<TokenizerMode>,
    pub vocab_size: Option<usize>,
}

#[derive(Error, Debug)]
pub enum TokenizerConfigError {
    #[error("Vocabulary size must be a positive integer, got {0}")]
    InvalidVocabSize(usize),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

pub type TokenizerConfigResult<T> = std::result::Result<T, TokenizerConfigError>;

impl TokenizerConfig {
    pub fn mode(&self) -> TokenizerMode {
        self.mode.unwrap_or_default()
    }

    pub fn vocab_size(&self) -> usize {
        self.vocab_size.unwrap_or(DEFAULT_VOCAB_SIZE)
    }

    ///
    /// Reject configurations that can never produce a usable tokenizer.
    ///
    pub fn validate(self) -> TokenizerConfigResult<Self> {
        match self.vocab_size {
            Some(0) => Err(TokenizerConfigError::InvalidVocabSize(0)),
            _ => Ok(self),
        }
    }
}

impl FromStr for TokenizerConfig {
    type Err = TokenizerConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: TokenizerConfig = toml::from_str(s)?;
        config.validate()
    }
}

impl TryFrom<&Path> for TokenizerConfig {
    type Error = TokenizerConfigError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let toml_str = read_to_string(path)?;
        toml_str.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use std::path::PathBuf;

    #[rstest]
    #[case("word", TokenizerMode::Word)]
    #[case("char", TokenizerMode::Char)]
    fn test_parse_mode(#[case] input: &str, #[case] expected: TokenizerMode) {
        assert_eq!(input.parse::<TokenizerMode>().unwrap(), expected);
        assert_eq!(expected.to_string(), input);
    }

    #[rstest]
    #[case("bpe")]
    #[case("Word")]
    #[case("")]
    fn test_parse_invalid_mode(#[case] input: &str) {
        let result = TokenizerMode::try_from(input);
        assert_eq!(
            matches!(result, Err(TokenizerError::InvalidMode(ref m)) if m == input),
            true
        );
    }

    #[rstest]
    fn test_try_from_toml() {
        let path = PathBuf::from("../tests/data/tokenizers/tokenizer.toml");
        let result = TokenizerConfig::try_from(path.as_path());
        assert_eq!(result.is_ok(), true);
    }

    #[rstest]
    fn test_get_mode_and_vocab_size() {
        let path = PathBuf::from("../tests/data/tokenizers/tokenizer_char.toml");
        let config = TokenizerConfig::try_from(path.as_path()).unwrap();

        assert_eq!(config.mode(), TokenizerMode::Char);
        assert_eq!(config.vocab_size(), 64);
    }

    #[rstest]
    fn test_defaults_for_empty_config() {
        let config: TokenizerConfig = "".parse().unwrap();
        assert_eq!(config.mode(), TokenizerMode::Word);
        assert_eq!(config.vocab_size(), DEFAULT_VOCAB_SIZE);
    }

    #[rstest]
    fn test_bad_mode_in_config() {
        let path = PathBuf::from("../tests/data/tokenizers/tokenizer_bad_mode.toml");
        let result = TokenizerConfig::try_from(path.as_path());
        assert_eq!(matches!(result, Err(TokenizerConfigError::Toml(_))), true);
    }

    #[rstest]
    fn test_zero_vocab_size_rejected() {
        let result = "vocab_size = 0".parse::<TokenizerConfig>();
        assert_eq!(
            matches!(result, Err(TokenizerConfigError::InvalidVocabSize(0))),
            true
        );
    }

    #[rstest]
    fn test_missing_config_file() {
        let path = PathBuf::from("../tests/data/tokenizers/does_not_exist.toml");
        let result = TokenizerConfig::try_from(path.as_path());
        assert_eq!(matches!(result, Err(TokenizerConfigError::Io(_))), true);
    }
}
