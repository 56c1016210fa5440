//!
//! This module contains utility functions for tokenizers: special token handling
//! and conversion between id lists and their text form.
//!
use super::TokenizerError;
use super::segment::is_punctuation;

pub mod special_tokens;

///
/// Parse a list of token ids written as numbers separated by commas and/or whitespace,
/// e.g. `"2, 5, 8, 3"` or `"2 5\n8,3"`.
///
/// # Arguments:
/// - input: the text to parse
///
/// # Returns:
/// - the parsed ids; an empty list for blank input
///
pub fn parse_token_ids(input: &str) -> Result<Vec<u32>, TokenizerError> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<u32>().map_err(|_| {
                TokenizerError::ParseError(format!("`{part}` is not a valid token id"))
            })
        })
        .collect()
}

///
/// Render token ids as a `", "` separated list; the inverse of [`parse_token_ids`].
///
pub fn format_token_ids(ids: &[u32]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<String>>()
        .join(", ")
}

///
/// Whether a decoded unit is a lone whitespace or punctuation character. Such units
/// never get a space inserted around them when spacing has to be guessed.
///
pub fn is_space_or_punct(unit: &str) -> bool {
    let mut chars = unit.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => ch.is_whitespace() || is_punctuation(ch),
        _ => false,
    }
}
