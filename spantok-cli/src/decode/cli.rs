use clap::{Arg, Command};

use crate::common::tokenizer_args;

pub const DECODE_CMD: &str = "decode";

pub fn create_decode_cli() -> Command {
    Command::new(DECODE_CMD)
        .about("Train a tokenizer on the text, encode it, then decode a list of token ids")
        .args(tokenizer_args())
        .arg(
            Arg::new("ids")
                .long("ids")
                .short('i')
                .required(true)
                .help("Token ids separated by commas or whitespace (e.g. \"2, 5, 8, 3\")"),
        )
}
