use std::collections::HashSet;
use std::fs::read_to_string;

use pretty_assertions::assert_eq;
use rstest::*;

use spantok_tokenizers::{Tokenizer, TokenizerMode};

#[fixture]
fn corpus() -> String {
    read_to_string("../tests/data/tokenizers/corpus.txt").expect("corpus fixture is missing")
}

fn chars_between(text: &str, start: usize, end: usize) -> String {
    text.chars().skip(start).take(end - start).collect()
}

#[rstest]
#[case("plain ascii text, with punctuation!")]
#[case("  Leading and trailing  \n")]
#[case("Ünïcödé, 中文 and émoji 🎉?")]
fn char_mode_round_trip(#[case] text: &str) {
    let mut tokenizer = Tokenizer::new(TokenizerMode::Char, 10);
    tokenizer.train("abc", 10, TokenizerMode::Char);

    let encoding = tokenizer.encode(text);
    let decoded = tokenizer.decode(&encoding.ids);

    assert_eq!(decoded, text);
    assert_eq!(decoded.contains("[UNK]"), false);
}

#[rstest]
fn word_mode_round_trip_of_unedited_ids(corpus: String) {
    let mut tokenizer = Tokenizer::default();
    tokenizer.train(&corpus, 1000, TokenizerMode::Word);

    let encoding = tokenizer.encode(&corpus);
    assert_eq!(tokenizer.decode(&encoding.ids), corpus.to_lowercase());
}

#[rstest]
#[case(TokenizerMode::Word)]
#[case(TokenizerMode::Char)]
fn empty_input_boundaries(#[case] mode: TokenizerMode) {
    let mut tokenizer = Tokenizer::new(mode, 1000);
    tokenizer.train("some text", 1000, mode);

    let encoding = tokenizer.encode("");
    assert_eq!(encoding.ids.is_empty(), true);
    assert_eq!(encoding.spans.is_empty(), true);
    assert_eq!(tokenizer.decode(&[]), "");
}

#[rstest]
#[case(1000)]
#[case(10)]
#[case(5)]
#[case(4)]
#[case(1)]
fn word_vocab_respects_size_bound(corpus: String, #[case] vocab_size: usize) {
    let mut tokenizer = Tokenizer::default();
    tokenizer.train(&corpus, vocab_size, TokenizerMode::Word);

    assert_eq!(
        tokenizer.get_vocabulary().len() <= vocab_size.saturating_sub(4),
        true
    );
}

#[rstest]
#[case(TokenizerMode::Word)]
#[case(TokenizerMode::Char)]
fn ids_are_unique_and_above_specials(corpus: String, #[case] mode: TokenizerMode) {
    let mut tokenizer = Tokenizer::new(mode, 1000);
    tokenizer.train(&corpus, 1000, mode);

    let ids: Vec<u32> = tokenizer.get_vocabulary().iter().map(|(id, _)| id).collect();
    let distinct: HashSet<u32> = ids.iter().copied().collect();

    assert_eq!(distinct.len(), ids.len());
    assert_eq!(ids.iter().all(|id| *id >= 4), true);
}

#[rstest]
fn word_spans_are_ordered_and_exact(corpus: String) {
    let mut tokenizer = Tokenizer::default();
    tokenizer.train(&corpus, 1000, TokenizerMode::Word);
    let encoding = tokenizer.encode(&corpus);

    assert_eq!(encoding.spans.len(), encoding.tokens.len());
    for pair in encoding.spans.windows(2) {
        assert_eq!(pair[0].start <= pair[1].start, true);
    }
    for span in encoding.spans.iter() {
        assert_eq!(chars_between(&corpus, span.start, span.end), span.text);
    }
}

#[rstest]
fn highlight_rebuilds_the_input(corpus: String) {
    let mut tokenizer = Tokenizer::default();
    tokenizer.train(&corpus, 1000, TokenizerMode::Word);
    let encoding = tokenizer.encode(&corpus);

    let pieces = encoding.highlight(&corpus);
    let rebuilt: String = pieces.iter().map(|p| p.text.as_str()).collect();
    let token_count = pieces.iter().filter(|p| p.token_id.is_some()).count();

    assert_eq!(rebuilt, corpus);
    assert_eq!(token_count, encoding.tokens.len());
}

#[rstest]
fn worked_example() {
    let mut tokenizer = Tokenizer::default();
    tokenizer
        .train_with_mode_str("Hi there. Hi!", 1000, "word")
        .expect("word is a valid mode");

    let encoding = tokenizer.encode("Hi there. Hi!");
    assert_eq!(encoding.ids, vec![2, 4, 5, 6, 4, 7, 3]);
    assert_eq!(tokenizer.decode(&[4, 5, 6, 4, 7]), "hi there. hi!");
}

#[rstest]
fn independent_tokenizers_do_not_share_state() {
    let mut words = Tokenizer::new(TokenizerMode::Word, 1000);
    let mut chars = Tokenizer::new(TokenizerMode::Char, 1000);

    words.train("alpha beta", 1000, TokenizerMode::Word);
    chars.train("xyz", 1000, TokenizerMode::Char);
    chars.encode("new letters");

    assert_eq!(words.get_vocabulary().len(), 2);
    assert_eq!(words.convert_token_to_id("alpha"), Some(4));
}
