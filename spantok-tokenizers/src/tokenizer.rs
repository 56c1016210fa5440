use std::collections::HashMap as StdHashMap;
use std::path::Path;

use log::{debug, trace};

use super::config::{DEFAULT_VOCAB_SIZE, TokenizerConfig, TokenizerMode};
use super::encoding::{Encoding, token_spans};
use super::error::TokenizerError;
use super::segment::{Segment, segment};
use super::utils::is_space_or_punct;
use super::utils::special_tokens::{
    BOS_TOKEN_ID, EOS_TOKEN_ID, NUM_SPECIAL_TOKENS, PAD_TOKEN_ID, SpecialToken, UNK_TOKEN_ID,
    is_special_token_id, special_tokens_map,
};
use super::vocab::Vocabulary;

///
/// A reversible word or character tokenizer.
///
/// The tokenizer owns its vocabulary and the spacing recorded by the last call to
/// [`Tokenizer::encode`]. Both are mutated in place, so one instance serves one caller
/// driving `train -> encode -> decode` in sequence; independent callers should use
/// independent instances.
///
#[derive(Debug, Clone)]
pub struct Tokenizer {
    mode: TokenizerMode,
    vocab_size: usize,
    vocab: Vocabulary,
    /// Whitespace that followed each segment of the last encoded text.
    spacing: Vec<String>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Tokenizer::new(TokenizerMode::default(), DEFAULT_VOCAB_SIZE)
    }
}

impl From<TokenizerConfig> for Tokenizer {
    fn from(config: TokenizerConfig) -> Self {
        Tokenizer::new(config.mode(), config.vocab_size())
    }
}

impl Tokenizer {
    ///
    /// Create a new, untrained tokenizer
    ///
    pub fn new(mode: TokenizerMode, vocab_size: usize) -> Self {
        Self {
            mode,
            vocab_size,
            vocab: Vocabulary::new(),
            spacing: vec![],
        }
    }

    ///
    /// Create a new, untrained tokenizer from a toml config file
    ///
    pub fn from_config<P: AsRef<Path>>(cfg_path: P) -> Result<Self, TokenizerError> {
        let config = TokenizerConfig::try_from(cfg_path.as_ref())?;
        Ok(Tokenizer::from(config))
    }

    ///
    /// Switch unit granularity. Learned units and recorded spacing belong to the old
    /// granularity, so both are dropped.
    ///
    pub fn set_mode(&mut self, mode: TokenizerMode) {
        self.mode = mode;
        self.vocab.clear();
        self.spacing.clear();
    }

    pub fn set_mode_str(&mut self, mode: &str) -> Result<(), TokenizerError> {
        self.set_mode(mode.parse()?);
        Ok(())
    }

    ///
    /// Rebuild the vocabulary from `text`.
    ///
    /// Word mode keeps the `vocab_size - 4` most frequent lowercased units. Char mode
    /// keeps every distinct character and ignores `vocab_size`.
    ///
    /// # Arguments
    /// - `text` - the training text
    /// - `vocab_size` - upper bound on ids, special tokens included
    /// - `mode` - the mode to train in; switching modes clears all state first
    ///
    pub fn train(&mut self, text: &str, vocab_size: usize, mode: TokenizerMode) {
        if mode != self.mode {
            self.set_mode(mode);
        }
        self.vocab_size = vocab_size;

        let segments: Vec<Segment> = segment(text, self.mode).collect();
        self.vocab = match self.mode {
            TokenizerMode::Word => Vocabulary::from_word_segments(&segments, vocab_size),
            TokenizerMode::Char => Vocabulary::from_char_segments(&segments),
        };

        debug!(
            "Trained {} vocabulary: {} units from {} segments",
            self.mode,
            self.vocab.len(),
            segments.len()
        );
    }

    ///
    /// Same as [`Tokenizer::train`], with the mode given by name (`"word"` or `"char"`).
    ///
    pub fn train_with_mode_str(
        &mut self,
        text: &str,
        vocab_size: usize,
        mode: &str,
    ) -> Result<(), TokenizerError> {
        let mode: TokenizerMode = mode.parse()?;
        self.train(text, vocab_size, mode);
        Ok(())
    }

    ///
    /// Retrain on `text` with the current mode and vocabulary size.
    ///
    pub fn train_with_defaults(&mut self, text: &str) {
        self.train(text, self.vocab_size, self.mode);
    }

    ///
    /// Split text into units without assigning ids.
    ///
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        segment(text, self.mode)
            .map(|s| s.text().into_owned())
            .collect()
    }

    ///
    /// Encode text into ids wrapped in `BOS`/`EOS`, along with the span of every token.
    ///
    /// Unknown words become `UNK`. Unknown characters are added to the vocabulary on the
    /// spot, so in char mode encoding keeps growing the vocabulary. The whitespace after
    /// each segment is recorded for the next [`Tokenizer::decode`]. Empty text returns an
    /// empty encoding and leaves the tokenizer untouched.
    ///
    pub fn encode(&mut self, text: &str) -> Encoding {
        if text.is_empty() {
            return Encoding::default();
        }

        let segments: Vec<Segment> = segment(text, self.mode).collect();

        let mut ids = Vec::with_capacity(segments.len() + 2);
        ids.push(BOS_TOKEN_ID);
        for segment in segments.iter() {
            ids.push(self.encode_segment(segment));
        }
        ids.push(EOS_TOKEN_ID);

        self.spacing = segments
            .iter()
            .map(|s| s.following_whitespace().to_string())
            .collect();

        let special_tokens_mask = ids
            .iter()
            .map(|id| u8::from(*id == BOS_TOKEN_ID || *id == EOS_TOKEN_ID))
            .collect();

        Encoding {
            tokens: segments.iter().map(|s| s.text().into_owned()).collect(),
            spans: token_spans(text, &segments, self.mode),
            ids,
            special_tokens_mask,
        }
    }

    fn encode_segment(&mut self, segment: &Segment) -> u32 {
        match self.mode {
            TokenizerMode::Word => self
                .vocab
                .convert_token_to_id(&segment.text().to_lowercase())
                .unwrap_or(UNK_TOKEN_ID),
            TokenizerMode::Char => {
                let unit = segment.text();
                match self.vocab.convert_token_to_id(&unit) {
                    Some(id) => id,
                    None => {
                        let id = self.vocab.add_unit(&unit);
                        trace!("Added unseen character {:?} as id {}", unit, id);
                        id
                    }
                }
            }
        }
    }

    ///
    /// Decode ids back into text.
    ///
    /// `BOS`, `EOS` and `PAD` are dropped, `UNK` is rendered as `[UNK]` and ids without
    /// a mapping contribute nothing. In word mode the spacing recorded by the last
    /// [`Tokenizer::encode`] is replayed when it lines up with the ids; otherwise a single
    /// space is guessed between consecutive words.
    ///
    pub fn decode(&self, ids: &[u32]) -> String {
        let units: Vec<&str> = ids
            .iter()
            .filter(|id| {
                !SpecialToken::from_id(**id).is_some_and(SpecialToken::is_stripped_on_decode)
            })
            .map(|id| self.decode_id(*id))
            .collect();

        match self.mode {
            TokenizerMode::Char => units.concat(),
            TokenizerMode::Word if self.spacing.len() == units.len() => {
                self.decode_with_spacing(&units)
            }
            TokenizerMode::Word => {
                trace!(
                    "Spacing for {} segments does not match {} ids, guessing spaces",
                    self.spacing.len(),
                    units.len()
                );
                decode_with_heuristic_spacing(&units)
            }
        }
    }

    fn decode_id(&self, id: u32) -> &str {
        if id == UNK_TOKEN_ID {
            return SpecialToken::Unk.token();
        }
        self.vocab.convert_id_to_token(id).unwrap_or("")
    }

    fn decode_with_spacing(&self, units: &[&str]) -> String {
        let mut text = String::new();
        for (unit, whitespace) in units.iter().zip(self.spacing.iter()) {
            if unit.is_empty() {
                continue;
            }
            text.push_str(unit);
            text.push_str(whitespace);
        }
        text
    }

    pub fn convert_token_to_id(&self, token: &str) -> Option<u32> {
        match SpecialToken::from_token(token) {
            Some(special) => Some(special.id()),
            None => self.vocab.convert_token_to_id(token),
        }
    }

    pub fn convert_id_to_token(&self, id: u32) -> Option<String> {
        match SpecialToken::from_id(id) {
            Some(special) => Some(special.token().to_string()),
            None => self.vocab.convert_id_to_token(id).map(str::to_string),
        }
    }

    pub fn get_mode(&self) -> TokenizerMode {
        self.mode
    }

    ///
    /// The vocabulary size used by [`Tokenizer::train_with_defaults`]; set at construction
    /// and updated by every [`Tokenizer::train`].
    ///
    pub fn get_max_vocab_size(&self) -> usize {
        self.vocab_size
    }

    ///
    /// Vocabulary size including the special tokens.
    ///
    pub fn get_vocab_size(&self) -> usize {
        self.vocab.len() + NUM_SPECIAL_TOKENS as usize
    }

    ///
    /// The full `token -> id` map, special tokens included.
    ///
    pub fn get_vocab(&self) -> StdHashMap<String, u32> {
        let mut vocab = special_tokens_map();
        vocab.extend(self.vocab.iter().map(|(id, unit)| (unit.to_string(), id)));
        vocab
    }

    ///
    /// The learned units only.
    ///
    pub fn get_vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    ///
    /// Whitespace recorded per segment by the last non-empty [`Tokenizer::encode`].
    ///
    pub fn get_spacing_info(&self) -> &[String] {
        &self.spacing
    }

    pub fn get_pad_token(&self) -> String {
        SpecialToken::Pad.token().to_string()
    }

    pub fn get_unk_token(&self) -> String {
        SpecialToken::Unk.token().to_string()
    }

    pub fn get_bos_token(&self) -> String {
        SpecialToken::Bos.token().to_string()
    }

    pub fn get_eos_token(&self) -> String {
        SpecialToken::Eos.token().to_string()
    }

    // ids
    pub fn get_pad_token_id(&self) -> u32 {
        PAD_TOKEN_ID
    }

    pub fn get_unk_token_id(&self) -> u32 {
        UNK_TOKEN_ID
    }

    pub fn get_bos_token_id(&self) -> u32 {
        BOS_TOKEN_ID
    }

    pub fn get_eos_token_id(&self) -> u32 {
        EOS_TOKEN_ID
    }

    ///
    /// 1 for every reserved id in `ids`, `UNK` included, 0 for learned units.
    ///
    pub fn get_special_tokens_mask(&self, ids: &[u32]) -> Vec<u8> {
        ids.iter().map(|id| u8::from(is_special_token_id(*id))).collect()
    }
}

fn decode_with_heuristic_spacing(units: &[&str]) -> String {
    let mut text = String::new();
    for (i, unit) in units.iter().enumerate() {
        if unit.is_empty() {
            continue;
        }
        if !is_space_or_punct(unit) && i > 0 && !is_space_or_punct(units[i - 1]) {
            text.push(' ');
        }
        text.push_str(unit);
    }
    text
}
