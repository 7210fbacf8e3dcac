//! Position types
//!
//! A position names one word: `Gen 1:18.8` is the eighth word of Genesis
//! 1:18. Word indices are held 0-based and written 1-based.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Address of a single word
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Fixed book abbreviation (see [`super::abbreviation`])
    pub book_abbr: String,
    pub chapter: u32,
    pub verse: u32,
    /// 0-based word index within the verse
    pub word_index: u32,
}

/// An ordered pair of positions bounding a tag or a selection
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

/// Verse-granularity key: (book abbreviation, chapter, verse)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VerseKey {
    pub book_abbr: String,
    pub chapter: u32,
    pub verse: u32,
}

impl Position {
    pub fn new(book_abbr: impl Into<String>, chapter: u32, verse: u32, word_index: u32) -> Self {
        Self {
            book_abbr: book_abbr.into(),
            chapter,
            verse,
            word_index,
        }
    }

    /// 1-based word number as shown to readers
    pub fn display_word(&self) -> u32 {
        self.word_index.saturating_add(1)
    }

    /// The verse this word belongs to
    pub fn verse_key(&self) -> VerseKey {
        VerseKey::new(self.book_abbr.clone(), self.chapter, self.verse)
    }

    /// Whether both positions address the same verse (ignoring book)
    pub(crate) fn same_verse(&self, other: &Position) -> bool {
        self.chapter == other.chapter && self.verse == other.verse
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}:{}.{}",
            self.book_abbr,
            self.chapter,
            self.verse,
            self.display_word()
        )
    }
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// A range covering exactly one word
    pub fn single(position: Position) -> Self {
        Self {
            start: position.clone(),
            end: position,
        }
    }

    /// Both endpoints name the same book
    pub fn is_single_book(&self) -> bool {
        self.start.book_abbr == self.end.book_abbr
    }

    /// Reader-facing label, collapsing repeated parts.
    ///
    /// `Gen 1:1.1`, `Gen 1:1.1 - 1.5` or `Gen 1:1.1 - Gen 1:2.5`.
    pub fn label(&self) -> String {
        let (start, end) = (&self.start, &self.end);
        if start == end {
            start.to_string()
        } else if start.same_verse(end) && self.is_single_book() {
            format!("{} - {}.{}", start, end.verse, end.display_word())
        } else {
            format!("{} - {}", start, end)
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}

impl VerseKey {
    pub fn new(book_abbr: impl Into<String>, chapter: u32, verse: u32) -> Self {
        Self {
            book_abbr: book_abbr.into(),
            chapter,
            verse,
        }
    }

    /// (chapter, verse) pair for ordering within one book
    pub(crate) fn chapter_verse(&self) -> (u32, u32) {
        (self.chapter, self.verse)
    }
}

impl fmt::Display for VerseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:{}", self.book_abbr, self.chapter, self.verse)
    }
}
