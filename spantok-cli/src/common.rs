//!
//! Arguments and setup shared by every subcommand: where the text comes from and how
//! the tokenizer is configured and trained.
//!
use std::fs::read_to_string;

use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, value_parser};
use log::info;

use spantok_tokenizers::{Tokenizer, TokenizerMode};

pub const TEXT_ARG: &str = "text";
pub const FILE_ARG: &str = "file";
pub const MODE_ARG: &str = "mode";
pub const VOCAB_SIZE_ARG: &str = "vocab-size";
pub const CONFIG_ARG: &str = "config";
pub const JSON_ARG: &str = "json";

pub fn tokenizer_args() -> Vec<Arg> {
    vec![
        Arg::new(TEXT_ARG)
            .help("Text to work on (use --file to read it from disk instead)")
            .conflicts_with(FILE_ARG)
            .required_unless_present(FILE_ARG),
        Arg::new(FILE_ARG)
            .long("file")
            .short('f')
            .help("Read the text from this file"),
        Arg::new(MODE_ARG)
            .long("mode")
            .short('m')
            .help("Tokenizer mode: word or char"),
        Arg::new(VOCAB_SIZE_ARG)
            .long("vocab-size")
            .short('v')
            .value_parser(value_parser!(u64).range(1..))
            .help("Maximum vocabulary size, special tokens included (word mode only)"),
        Arg::new(CONFIG_ARG)
            .long("config")
            .short('c')
            .help("Path to a tokenizer toml config; --mode and --vocab-size override it"),
        Arg::new(JSON_ARG)
            .long("json")
            .action(clap::ArgAction::SetTrue)
            .help("Print the result as JSON"),
    ]
}

///
/// Get the input text from either the positional argument or `--file`.
///
pub fn read_text(matches: &ArgMatches) -> Result<String> {
    if let Some(path) = matches.get_one::<String>(FILE_ARG) {
        return read_to_string(path).with_context(|| format!("Failed to read text from {path}"));
    }

    matches
        .get_one::<String>(TEXT_ARG)
        .cloned()
        .context("Either a text argument or --file is required.")
}

///
/// Build an untrained tokenizer from `--config`, then apply `--mode` / `--vocab-size`.
///
/// # Returns
/// The tokenizer along with the vocabulary size and mode to train with.
///
pub fn build_tokenizer(matches: &ArgMatches) -> Result<(Tokenizer, usize, TokenizerMode)> {
    let mut tokenizer = match matches.get_one::<String>(CONFIG_ARG) {
        Some(path) => Tokenizer::from_config(path)?,
        None => Tokenizer::default(),
    };

    if let Some(mode) = matches.get_one::<String>(MODE_ARG) {
        tokenizer.set_mode_str(mode)?;
    }
    let mode = tokenizer.get_mode();

    let vocab_size = match matches.get_one::<u64>(VOCAB_SIZE_ARG) {
        Some(size) => usize::try_from(*size).context("Vocabulary size is too large")?,
        None => tokenizer.get_max_vocab_size(),
    };

    Ok((tokenizer, vocab_size, mode))
}

///
/// Build a tokenizer and train it on `text`.
///
pub fn train_tokenizer(matches: &ArgMatches, text: &str) -> Result<Tokenizer> {
    let (mut tokenizer, vocab_size, mode) = build_tokenizer(matches)?;
    tokenizer.train(text, vocab_size, mode);

    info!(
        "Trained {} tokenizer with {} ids",
        mode,
        tokenizer.get_vocab_size()
    );

    Ok(tokenizer)
}
