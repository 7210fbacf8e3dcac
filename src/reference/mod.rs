//! Scripture position module
//!
//! Parsing, formatting and ordering of word positions.
//!
//! # Position format
//!
//! ```text
//! 1 Sam 3:4.12
//! │     │ │ └── word number (1-based on the wire, 0-based in memory)
//! │     │ └──── verse
//! │     └────── chapter
//! └──────────── book abbreviation (one or two tokens)
//! ```
//!
//! # Usage
//!
//! ```
//! use verse_index::reference::{format_position, parse, Range};
//!
//! let text = format_position("Genesis", 1, 3, 0);
//! assert_eq!(text, "Gen 1:3.1");
//!
//! let start = parse("Gen 1:3.5").unwrap();
//! let end = parse(&text).unwrap();
//! let range = Range::new(start, end).normalize();
//! assert_eq!(range.start.word_index, 0);
//! ```

mod books;
mod comparator;
mod parser;
mod types;

// Re-export main types
pub use types::{Position, Range, VerseKey};

// Re-export book catalogue
pub use books::{abbreviation, book_for_abbreviation, testament, Testament, BIBLE_BOOKS};

// Re-export parser functions
pub use parser::{parse, try_parse, PositionParseError};

// Re-export comparator functions
pub use comparator::{compare_position_strings, is_before};

/// Build a position for a word of a verse given by its full book name
pub fn position_for(book: &str, chapter: u32, verse: u32, word_index: u32) -> Position {
    Position::new(abbreviation(book), chapter, verse, word_index)
}

/// Format the textual position of a word (`word_index` is 0-based)
pub fn format_position(book: &str, chapter: u32, verse: u32, word_index: u32) -> String {
    position_for(book, chapter, verse, word_index).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_for_every_book() {
        for book in BIBLE_BOOKS {
            for (chapter, verse, word) in [(1, 1, 0), (12, 7, 3), (150, 176, 41)] {
                let text = format_position(book, chapter, verse, word);
                let pos = parse(&text).unwrap_or_else(|| panic!("failed to parse {}", text));
                assert_eq!(pos, Position::new(abbreviation(book), chapter, verse, word));
            }
        }
    }

    #[test]
    fn test_format_is_one_based() {
        assert_eq!(format_position("Exodus", 20, 3, 0), "Ex 20:3.1");
        assert_eq!(format_position("1 Corinthians", 13, 4, 9), "1 Cor 13:4.10");
    }

    #[test]
    fn test_fallback_book_matches_its_verses() {
        let book = "Bel and the Dragon";
        let text = format_position(book, 1, 1, 0);
        assert_eq!(text, "Bel 1:1.1");

        let range = Range::single(parse(&text).unwrap());
        let key = VerseKey::new(abbreviation(book), 1, 1);
        assert!(crate::resolver::contains_word(&range, &key, 0));
    }
}
