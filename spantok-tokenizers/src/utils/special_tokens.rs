use std::collections::HashMap;
use std::fmt::Display;

use serde::{Deserialize, Serialize};

pub const PAD_TOKEN_ID: u32 = 0;
pub const UNK_TOKEN_ID: u32 = 1;
pub const BOS_TOKEN_ID: u32 = 2;
pub const EOS_TOKEN_ID: u32 = 3;

/// Number of reserved ids. Every learned unit gets an id at or above this value.
pub const NUM_SPECIAL_TOKENS: u32 = 4;

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SpecialToken {
    Pad,
    Unk,
    Bos,
    Eos,
}

impl SpecialToken {
    /// All special tokens, ordered by id.
    pub const ALL: [SpecialToken; 4] = [
        SpecialToken::Pad,
        SpecialToken::Unk,
        SpecialToken::Bos,
        SpecialToken::Eos,
    ];

    pub fn id(self) -> u32 {
        match self {
            SpecialToken::Pad => PAD_TOKEN_ID,
            SpecialToken::Unk => UNK_TOKEN_ID,
            SpecialToken::Bos => BOS_TOKEN_ID,
            SpecialToken::Eos => EOS_TOKEN_ID,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            SpecialToken::Pad => "[PAD]",
            SpecialToken::Unk => "[UNK]",
            SpecialToken::Bos => "[BOS]",
            SpecialToken::Eos => "[EOS]",
        }
    }

    pub fn from_id(id: u32) -> Option<Self> {
        SpecialToken::ALL.into_iter().find(|special| special.id() == id)
    }

    pub fn from_token(token: &str) -> Option<Self> {
        SpecialToken::ALL
            .into_iter()
            .find(|special| special.token() == token)
    }

    ///
    /// Whether the token is stripped from an id sequence before decoding.
    /// `UNK` survives so that lost words stay visible in the decoded text.
    ///
    pub fn is_stripped_on_decode(self) -> bool {
        !matches!(self, SpecialToken::Unk)
    }
}

impl Display for SpecialToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

///
/// Check whether an id is one of the reserved special token ids.
///
pub fn is_special_token_id(id: u32) -> bool {
    id < NUM_SPECIAL_TOKENS
}

///
/// The special token set as a `token -> id` map.
///
pub fn special_tokens_map() -> HashMap<String, u32> {
    SpecialToken::ALL
        .into_iter()
        .map(|special| (special.token().to_string(), special.id()))
        .collect()
}
