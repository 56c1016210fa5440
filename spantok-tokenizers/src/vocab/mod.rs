//!
//! This module defines the `Vocabulary` struct, the bidirectional `unit <-> id` mapping
//! owned by a tokenizer.
//!
//! The vocabulary is the oracle of the tokenizer: the segmenter decides what the units are,
//! the vocabulary decides which ids they get. Learned units are numbered from
//! [`NUM_SPECIAL_TOKENS`] upwards, in the order they were added, so an id can never point
//! at more than one unit.
//!
pub mod training;

use fxhash::FxHashMap as HashMap;

use super::utils::special_tokens::{NUM_SPECIAL_TOKENS, SpecialToken};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Vocabulary {
    /// Learned units, indexed by `id - NUM_SPECIAL_TOKENS`.
    pub units: Vec<String>,
    pub unit_to_id: HashMap<String, u32>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    ///
    /// Add a unit to the vocabulary, returning its id. Units that are already
    /// known, either as learned units or as special tokens, keep their existing id.
    ///
    /// # Arguments:
    /// - `unit`: the unit to add
    ///
    pub fn add_unit(&mut self, unit: &str) -> u32 {
        if let Some(special) = SpecialToken::from_token(unit) {
            return special.id();
        }
        if let Some(id) = self.unit_to_id.get(unit) {
            return *id;
        }

        let new_id = self.next_id();
        self.unit_to_id.insert(unit.to_owned(), new_id);
        self.units.push(unit.to_owned());
        new_id
    }

    ///
    /// The id the next new unit would receive.
    ///
    pub fn next_id(&self) -> u32 {
        NUM_SPECIAL_TOKENS + self.units.len() as u32
    }

    ///
    /// Convert a unit to its corresponding ID.
    /// # Arguments:
    /// - `unit`: the unit to convert
    /// # Returns:
    /// - `Option<u32>`: the ID of the unit, or None if it was never learned
    ///
    pub fn convert_token_to_id(&self, unit: &str) -> Option<u32> {
        self.unit_to_id.get(unit).copied()
    }

    ///
    /// Convert an ID to its corresponding unit. Special token ids are not
    /// part of the learned vocabulary and return None.
    ///
    pub fn convert_id_to_token(&self, id: u32) -> Option<&str> {
        let index = id.checked_sub(NUM_SPECIAL_TOKENS)?;
        self.units.get(index as usize).map(String::as_str)
    }

    ///
    /// Number of learned units (special tokens excluded).
    ///
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn contains_unit(&self, unit: &str) -> bool {
        self.unit_to_id.contains_key(unit)
    }

    ///
    /// Forget every learned unit. Special tokens are structural and unaffected.
    ///
    pub fn clear(&mut self) {
        self.units.clear();
        self.unit_to_id.clear();
    }

    ///
    /// Iterate over `(id, unit)` pairs in id order.
    ///
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.units
            .iter()
            .enumerate()
            .map(|(index, unit)| (NUM_SPECIAL_TOKENS + index as u32, unit.as_str()))
    }
}

impl<S: AsRef<str>> FromIterator<S> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut vocab = Vocabulary::new();
        for unit in iter {
            vocab.add_unit(unit.as_ref());
        }
        vocab
    }
}
