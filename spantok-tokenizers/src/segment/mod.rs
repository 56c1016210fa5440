//!
//! This module splits raw text into the atomic units a tokenizer assigns ids to.
//!
//! In word mode a unit is a run of characters that are neither whitespace nor punctuation,
//! or a single punctuation character. The whitespace run that follows a unit is kept on that
//! unit so the original layout can be rebuilt on decode. In char mode every character is a
//! unit of its own and nothing is dropped or merged.
//!
//! All offsets are character (Unicode scalar) offsets, not byte offsets.
//!
//! Whitespace is whatever [`char::is_whitespace`] accepts (the Unicode `White_Space`
//! property). That includes U+0085 NEXT LINE, which splits words, and excludes U+FEFF
//! ZERO WIDTH NO-BREAK SPACE, which stays inside a word.
//!
use std::borrow::Cow;
use std::iter::{FusedIterator, Peekable};
use std::str::Chars;

use crate::config::TokenizerMode;

pub const PUNCTUATION: [char; 6] = ['.', ',', '!', '?', ';', ':'];

pub fn is_punctuation(ch: char) -> bool {
    PUNCTUATION.contains(&ch)
}

///
/// Case information for a letter segment.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseInfo {
    pub lower: String,
    /// True only for characters that have a distinct case and are currently uppercase.
    pub is_upper: bool,
}

impl CaseInfo {
    pub fn of(ch: char) -> Self {
        let lower: String = ch.to_lowercase().collect();
        let is_upper = ch.to_uppercase().eq([ch]) && ch.to_lowercase().ne([ch]);
        CaseInfo { lower, is_upper }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// A word-mode unit: maximal run of non-whitespace, non-punctuation characters.
    Word {
        text: String,
        start: usize,
        following_whitespace: String,
    },
    /// A single punctuation character (both modes).
    Punct {
        ch: char,
        start: usize,
        following_whitespace: String,
    },
    /// A char-mode letter (anything that is not whitespace or punctuation).
    Char {
        ch: char,
        start: usize,
        case: CaseInfo,
    },
    /// A char-mode whitespace character.
    Space { ch: char, start: usize },
}

impl Segment {
    ///
    /// The unit text exactly as it appears in the source.
    ///
    pub fn text(&self) -> Cow<'_, str> {
        match self {
            Segment::Word { text, .. } => Cow::Borrowed(text.as_str()),
            Segment::Punct { ch, .. } | Segment::Char { ch, .. } | Segment::Space { ch, .. } => {
                Cow::Owned(ch.to_string())
            }
        }
    }

    pub fn start(&self) -> usize {
        match self {
            Segment::Word { start, .. }
            | Segment::Punct { start, .. }
            | Segment::Char { start, .. }
            | Segment::Space { start, .. } => *start,
        }
    }

    ///
    /// Length of the unit in characters.
    ///
    pub fn char_len(&self) -> usize {
        match self {
            Segment::Word { text, .. } => text.chars().count(),
            Segment::Punct { .. } | Segment::Char { .. } | Segment::Space { .. } => 1,
        }
    }

    ///
    /// The whitespace that followed this unit in the source. Always empty in char mode,
    /// where whitespace is a unit of its own.
    ///
    pub fn following_whitespace(&self) -> &str {
        match self {
            Segment::Word {
                following_whitespace,
                ..
            }
            | Segment::Punct {
                following_whitespace,
                ..
            } => following_whitespace,
            Segment::Char { .. } | Segment::Space { .. } => "",
        }
    }

    fn set_following_whitespace(&mut self, whitespace: String) {
        match self {
            Segment::Word {
                following_whitespace,
                ..
            }
            | Segment::Punct {
                following_whitespace,
                ..
            } => *following_whitespace = whitespace,
            Segment::Char { .. } | Segment::Space { .. } => {}
        }
    }
}

///
/// Lazy iterator over the segments of a piece of text.
///
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    chars: Peekable<Chars<'a>>,
    mode: TokenizerMode,
    offset: usize,
    emitted: bool,
}

///
/// Segment `text` according to `mode`. The result is a pure function of its inputs, so
/// calling this again on the same text restarts the sequence.
///
pub fn segment(text: &str, mode: TokenizerMode) -> Segments<'_> {
    Segments {
        chars: text.chars().peekable(),
        mode,
        offset: 0,
        emitted: false,
    }
}

impl Segments<'_> {
    fn bump(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        self.offset += 1;
        Some(ch)
    }

    fn take_whitespace_run(&mut self) -> String {
        let mut whitespace = String::new();
        while let Some(ch) = self.chars.next_if(|c| c.is_whitespace()) {
            self.offset += 1;
            whitespace.push(ch);
        }
        whitespace
    }

    fn next_char(&mut self) -> Option<Segment> {
        let start = self.offset;
        let ch = self.bump()?;

        let segment = if ch.is_whitespace() {
            Segment::Space { ch, start }
        } else if is_punctuation(ch) {
            Segment::Punct {
                ch,
                start,
                following_whitespace: String::new(),
            }
        } else {
            Segment::Char {
                ch,
                start,
                case: CaseInfo::of(ch),
            }
        };

        Some(segment)
    }

    fn next_word(&mut self) -> Option<Segment> {
        // leading whitespace has no previous segment to attach to
        if !self.emitted {
            self.take_whitespace_run();
        }

        let start = self.offset;
        let first = self.bump()?;

        let mut segment = if is_punctuation(first) {
            Segment::Punct {
                ch: first,
                start,
                following_whitespace: String::new(),
            }
        } else {
            let mut text = String::from(first);
            while let Some(ch) = self
                .chars
                .next_if(|c| !c.is_whitespace() && !is_punctuation(*c))
            {
                self.offset += 1;
                text.push(ch);
            }
            Segment::Word {
                text,
                start,
                following_whitespace: String::new(),
            }
        };

        segment.set_following_whitespace(self.take_whitespace_run());
        self.emitted = true;

        Some(segment)
    }
}

impl Iterator for Segments<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Self::Item> {
        match self.mode {
            TokenizerMode::Word => self.next_word(),
            TokenizerMode::Char => self.next_char(),
        }
    }
}

impl FusedIterator for Segments<'_> {}
