use serde::Serialize;

use crate::config::TokenizerMode;
use crate::segment::Segment;

///
/// Where a token came from: a half-open range of character offsets into the
/// encoded text, plus the text found there.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenSpan {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Encoding {
    /// `BOS`, one id per segment, `EOS`.
    pub ids: Vec<u32>,
    /// The source text of every segment, in order.
    pub tokens: Vec<String>,
    pub spans: Vec<TokenSpan>,
    /// 1 at the `BOS` and `EOS` positions, 0 elsewhere.
    pub special_tokens_mask: Vec<u8>,
}

///
/// A piece of the input text for display: either an untokenized gap or a
/// token together with its id.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub text: String,
    pub token_id: Option<u32>,
}

impl Encoding {
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    ///
    /// Lay the original text out as alternating gaps and tokens, so that
    /// concatenating every piece gives back `text`. The id of the token at span
    /// `i` is `ids[i + 1]`, skipping the leading `BOS`.
    ///
    /// # Arguments:
    /// - `text`: the text this encoding was produced from
    ///
    pub fn highlight(&self, text: &str) -> Vec<Highlight> {
        if text.is_empty() {
            return vec![];
        }

        let chars: Vec<char> = text.chars().collect();
        let slice = |from: usize, to: usize| -> String {
            chars.get(from..to).unwrap_or(&[]).iter().collect()
        };

        let mut pieces = Vec::with_capacity(self.spans.len() * 2 + 1);
        let mut last = 0;

        for (index, span) in self.spans.iter().enumerate() {
            if span.start > last {
                pieces.push(Highlight {
                    text: slice(last, span.start),
                    token_id: None,
                });
            }
            pieces.push(Highlight {
                text: span.text.clone(),
                token_id: self.ids.get(index + 1).copied(),
            });
            last = span.end;
        }

        if last < chars.len() {
            pieces.push(Highlight {
                text: slice(last, chars.len()),
                token_id: None,
            });
        }

        pieces
    }
}

///
/// Compute the spans of `segments` inside `text`.
///
/// Char mode gives every segment the next single-character range. Word mode
/// searches for each unit starting at a cursor that only moves forward, so
/// repeated words resolve left to right; a unit that cannot be found is skipped.
///
pub fn token_spans(text: &str, segments: &[Segment], mode: TokenizerMode) -> Vec<TokenSpan> {
    match mode {
        TokenizerMode::Char => segments
            .iter()
            .enumerate()
            .map(|(cursor, segment)| TokenSpan {
                start: cursor,
                end: cursor + 1,
                text: segment.text().into_owned(),
            })
            .collect(),
        TokenizerMode::Word => locate_word_spans(text, segments),
    }
}

fn locate_word_spans(text: &str, segments: &[Segment]) -> Vec<TokenSpan> {
    let mut spans = Vec::with_capacity(segments.len());

    // the byte cursor drives the search, the char cursor tracks reported offsets
    let mut byte_cursor = 0;
    let mut char_cursor = 0;

    for segment in segments {
        let unit = segment.text();
        let Some(rest) = text.get(byte_cursor..) else {
            continue;
        };
        let Some(found) = rest.find(unit.as_ref()) else {
            continue;
        };

        let start = char_cursor + rest[..found].chars().count();
        let end = start + segment.char_len();

        let whitespace = segment.following_whitespace();
        byte_cursor += found + unit.len() + whitespace.len();
        char_cursor = end + whitespace.chars().count();

        spans.push(TokenSpan {
            start,
            end,
            text: unit.into_owned(),
        });
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    use crate::segment::segment;

    fn span(start: usize, end: usize, text: &str) -> TokenSpan {
        TokenSpan {
            start,
            end,
            text: text.to_string(),
        }
    }

    #[rstest]
    fn test_word_spans_resolve_repeats_in_order() {
        let text = "Hi there. Hi!";
        let segments: Vec<Segment> = segment(text, TokenizerMode::Word).collect();
        let spans = token_spans(text, &segments, TokenizerMode::Word);

        assert_eq!(
            spans,
            vec![
                span(0, 2, "Hi"),
                span(3, 8, "there"),
                span(8, 9, "."),
                span(10, 12, "Hi"),
                span(12, 13, "!"),
            ]
        );
    }

    #[rstest]
    fn test_word_spans_after_leading_whitespace_and_multibyte() {
        let text = "  día  a día";
        let segments: Vec<Segment> = segment(text, TokenizerMode::Word).collect();
        let spans = token_spans(text, &segments, TokenizerMode::Word);

        assert_eq!(
            spans,
            vec![span(2, 5, "día"), span(7, 8, "a"), span(9, 12, "día")]
        );
    }

    #[rstest]
    fn test_unlocatable_segment_is_skipped() {
        let segments: Vec<Segment> = segment("alpha beta", TokenizerMode::Word).collect();
        let spans = token_spans("beta", &segments, TokenizerMode::Word);
        assert_eq!(spans, vec![span(0, 4, "beta")]);
    }

    #[rstest]
    fn test_char_spans() {
        let text = "a b";
        let segments: Vec<Segment> = segment(text, TokenizerMode::Char).collect();
        let spans = token_spans(text, &segments, TokenizerMode::Char);
        assert_eq!(spans, vec![span(0, 1, "a"), span(1, 2, " "), span(2, 3, "b")]);
    }

    #[rstest]
    fn test_highlight_covers_input() {
        let encoding = Encoding {
            ids: vec![2, 4, 5, 6, 3],
            tokens: vec!["Hi".into(), "there".into(), "!".into()],
            spans: vec![span(1, 3, "Hi"), span(4, 9, "there"), span(9, 10, "!")],
            special_tokens_mask: vec![1, 0, 0, 0, 1],
        };

        let pieces = encoding.highlight(" Hi there!\n");
        let ids: Vec<Option<u32>> = pieces.iter().map(|p| p.token_id).collect();
        let rebuilt: String = pieces.iter().map(|p| p.text.as_str()).collect();

        assert_eq!(ids, vec![None, Some(4), None, Some(5), Some(6), None]);
        assert_eq!(rebuilt, " Hi there!\n");
    }

    #[rstest]
    fn test_highlight_without_spans() {
        let encoding = Encoding::default();
        assert_eq!(
            encoding.highlight("   "),
            vec![Highlight {
                text: "   ".to_string(),
                token_id: None
            }]
        );
        assert_eq!(encoding.highlight("").is_empty(), true);
    }
}
