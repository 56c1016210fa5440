//! # spantok-tokenizers
//!
//! Reversible word and character tokenizers that remember where every token came from.
//!
//! ## Purpose
//!
//! This crate turns raw text into integer token ids and back. Along the way it keeps the
//! character span of each token in the source text and the whitespace that separated
//! tokens, so that decoding an unedited id sequence rebuilds the original layout.
//!
//! ## Main Components
//!
//! - **`segment`**: splits text into words and punctuation, or into single characters
//! - **`Vocabulary`**: the `unit <-> id` mapping, frequency ranked in word mode
//! - **`Tokenizer`**: trains the vocabulary, encodes text to ids and decodes ids to text
//! - **`Encoding`**: the ids, token texts and spans produced by an encode
//!
//! Ids 0 to 3 are reserved for `[PAD]`, `[UNK]`, `[BOS]` and `[EOS]`.
//!
//! ## Example
//!
//! ```rust
//! use spantok_tokenizers::{Tokenizer, TokenizerMode};
//!
//! let mut tokenizer = Tokenizer::default();
//! tokenizer.train("Hi there. Hi!", 1000, TokenizerMode::Word);
//!
//! let encoding = tokenizer.encode("Hi there. Hi!");
//! assert_eq!(encoding.ids, vec![2, 4, 5, 6, 4, 7, 3]);
//!
//! // casing is not kept in word mode
//! assert_eq!(tokenizer.decode(&encoding.ids), "hi there. hi!");
//! ```
//!
pub mod config;
pub mod encoding;
pub mod error;
pub mod segment;
pub mod tokenizer;
pub mod utils;
pub mod vocab;

// re-export things
pub use config::*;
pub use encoding::*;
pub use error::*;
pub use segment::{Segment, segment};
pub use tokenizer::*;
pub use utils::*;
pub use vocab::*;
