//!
//! Vocabulary construction from segmented text.
//!
use fxhash::FxHashMap as HashMap;

use super::Vocabulary;
use crate::segment::Segment;
use crate::utils::special_tokens::NUM_SPECIAL_TOKENS;

///
/// Count unit frequencies, keeping units in the order they were first seen.
///
/// # Arguments:
/// - `units`: the units to count
///
/// # Returns:
/// - `Vec<(String, usize)>`: one `(unit, count)` entry per distinct unit
///
pub fn count_frequencies<I, S>(units: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut index: HashMap<String, usize> = HashMap::default();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for unit in units {
        let unit = unit.as_ref();
        match index.get(unit) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(unit.to_owned(), counts.len());
                counts.push((unit.to_owned(), 1));
            }
        }
    }

    counts
}

///
/// Order units by descending frequency. The sort is stable, so ties keep
/// their first-encounter order.
///
pub fn rank_by_frequency(mut counts: Vec<(String, usize)>) -> Vec<String> {
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.into_iter().map(|(unit, _)| unit).collect()
}

///
/// Largest number of learned units a vocabulary of `vocab_size` ids can hold.
///
pub fn max_learned_units(vocab_size: usize) -> usize {
    vocab_size.saturating_sub(NUM_SPECIAL_TOKENS as usize)
}

impl Vocabulary {
    ///
    /// Build a word-mode vocabulary: lowercased units ranked by frequency,
    /// truncated so that the special tokens plus learned units fit in `vocab_size`.
    ///
    pub fn from_word_segments(segments: &[Segment], vocab_size: usize) -> Self {
        let counts = count_frequencies(segments.iter().map(|s| s.text().to_lowercase()));
        rank_by_frequency(counts)
            .into_iter()
            .take(max_learned_units(vocab_size))
            .collect()
    }

    ///
    /// Build a char-mode vocabulary: every distinct character, in first-occurrence order.
    /// There is no size cap beyond the alphabet of the input.
    ///
    pub fn from_char_segments(segments: &[Segment]) -> Self {
        segments.iter().map(|s| s.text()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    use crate::config::TokenizerMode;
    use crate::segment::segment;

    #[rstest]
    fn test_count_frequencies_keeps_first_encounter_order() {
        let counts = count_frequencies(["b", "a", "b", "c", "a", "b"]);
        assert_eq!(
            counts,
            vec![
                ("b".to_string(), 3),
                ("a".to_string(), 2),
                ("c".to_string(), 1)
            ]
        );
    }

    #[rstest]
    fn test_rank_ties_are_stable() {
        let counts = count_frequencies(["x", "y", "z", "y"]);
        assert_eq!(rank_by_frequency(counts), vec!["y", "x", "z"]);
    }

    #[rstest]
    #[case(1000, 996)]
    #[case(5, 1)]
    #[case(4, 0)]
    #[case(1, 0)]
    fn test_max_learned_units(#[case] vocab_size: usize, #[case] expected: usize) {
        assert_eq!(max_learned_units(vocab_size), expected);
    }

    #[rstest]
    fn test_word_vocab_is_case_insensitive_and_ranked() {
        let segments: Vec<Segment> = segment("Hi there. Hi!", TokenizerMode::Word).collect();
        let vocab = Vocabulary::from_word_segments(&segments, 1000);

        let pairs: Vec<(u32, &str)> = vocab.iter().collect();
        assert_eq!(pairs, vec![(4, "hi"), (5, "there"), (6, "."), (7, "!")]);
    }

    #[rstest]
    fn test_word_vocab_is_truncated() {
        let segments: Vec<Segment> =
            segment("a b b c c c d d d d", TokenizerMode::Word).collect();
        let vocab = Vocabulary::from_word_segments(&segments, 6);

        assert_eq!(vocab.len(), 2);
        assert_eq!(vocab.convert_token_to_id("d"), Some(4));
        assert_eq!(vocab.convert_token_to_id("c"), Some(5));
        assert_eq!(vocab.contains_unit("a"), false);
    }

    #[rstest]
    fn test_char_vocab_ignores_frequency() {
        let segments: Vec<Segment> = segment("aab, b", TokenizerMode::Char).collect();
        let vocab = Vocabulary::from_char_segments(&segments);

        let pairs: Vec<(u32, &str)> = vocab.iter().collect();
        assert_eq!(pairs, vec![(4, "a"), (5, "b"), (6, ","), (7, " ")]);
    }
}
