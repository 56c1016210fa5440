use clap::{Command, arg};

use crate::common::tokenizer_args;

pub const ENCODE_CMD: &str = "encode";

pub fn create_encode_cli() -> Command {
    Command::new(ENCODE_CMD)
        .about("Train a tokenizer on the text and encode the text into token ids")
        .args(tokenizer_args())
        .arg(
            arg!(--spans "Also print the span of every token")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            arg!(--highlight "Print the text with every token annotated with its id")
                .action(clap::ArgAction::SetTrue),
        )
}
