//! Range containment
//!
//! The one place that decides whether a verse or a word lies inside a
//! range. Topic painting, single-tag painting and the topic index all call
//! these functions.
//!
//! Ranges are expected in reading order (see [`Range::normalize`]). Any
//! range whose endpoints disagree with each other or with the candidate on
//! the book abbreviation matches nothing.

use crate::reference::{Range, VerseKey};

/// Both endpoints share the candidate's book
fn same_book(range: &Range, book_abbr: &str) -> bool {
    range.start.book_abbr == book_abbr && range.end.book_abbr == book_abbr
}

/// Whether the verse lies within the range at verse granularity
pub fn contains_verse(range: &Range, verse: &VerseKey) -> bool {
    if !same_book(range, &verse.book_abbr) {
        return false;
    }

    let key = verse.chapter_verse();
    let start = (range.start.chapter, range.start.verse);
    let end = (range.end.chapter, range.end.verse);
    start <= key && key <= end
}

/// Whether word `word_index` of `verse` lies within the range.
///
/// Cases are checked in order:
/// 1. range starts and ends in this verse: word between both bounds
/// 2. this is the start verse: word at or after the start word
/// 3. this is the end verse: word at or before the end word
/// 4. any other verse strictly inside the range: every word
pub fn contains_word(range: &Range, verse: &VerseKey, word_index: u32) -> bool {
    if !same_book(range, &verse.book_abbr) {
        return false;
    }

    let (start, end) = (&range.start, &range.end);
    let (chapter, number) = verse.chapter_verse();

    if chapter == start.chapter && chapter == end.chapter {
        if number == start.verse && number == end.verse {
            start.word_index <= word_index && word_index <= end.word_index
        } else if number == start.verse {
            word_index >= start.word_index
        } else if number == end.verse {
            word_index <= end.word_index
        } else {
            number > start.verse && number < end.verse
        }
    } else if chapter == start.chapter {
        if number == start.verse {
            word_index >= start.word_index
        } else {
            number > start.verse
        }
    } else if chapter == end.chapter {
        if number == end.verse {
            word_index <= end.word_index
        } else {
            number < end.verse
        }
    } else {
        chapter > start.chapter && chapter < end.chapter
    }
}

/// Whether any verse of `chapter` in book `book_abbr` lies within the range
pub fn overlaps_chapter(range: &Range, book_abbr: &str, chapter: u32) -> bool {
    same_book(range, book_abbr) && range.start.chapter <= chapter && chapter <= range.end.chapter
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::Position;

    fn genesis(chapter: u32, verse: u32, word: u32) -> Position {
        Position::new("Gen", chapter, verse, word)
    }

    fn key(chapter: u32, verse: u32) -> VerseKey {
        VerseKey::new("Gen", chapter, verse)
    }

    #[test]
    fn test_single_verse_boundaries() {
        let range = Range::new(genesis(1, 1, 0), genesis(1, 1, 4));

        for word in 0..=4 {
            assert!(contains_word(&range, &key(1, 1), word), "word {}", word);
        }
        assert!(!contains_word(&range, &key(1, 1), 5));
        for word in 0..10 {
            assert!(!contains_word(&range, &key(1, 2), word));
        }
        assert!(contains_verse(&range, &key(1, 1)));
        assert!(!contains_verse(&range, &key(1, 2)));
    }

    #[test]
    fn test_cross_verse_range() {
        let range = Range::new(genesis(1, 1, 2), genesis(1, 3, 1));

        assert!(contains_verse(&range, &key(1, 2)));
        for word in 0..40 {
            assert!(contains_word(&range, &key(1, 2), word));
        }

        assert!(!contains_word(&range, &key(1, 1), 0));
        assert!(!contains_word(&range, &key(1, 1), 1));
        assert!(contains_word(&range, &key(1, 1), 2));
        assert!(contains_word(&range, &key(1, 1), 12));

        assert!(contains_word(&range, &key(1, 3), 0));
        assert!(contains_word(&range, &key(1, 3), 1));
        assert!(!contains_word(&range, &key(1, 3), 2));

        assert!(!contains_verse(&range, &key(1, 4)));
        assert!(!contains_word(&range, &key(1, 4), 0));
    }

    #[test]
    fn test_cross_chapter_range() {
        let range = Range::new(genesis(1, 30, 3), genesis(3, 2, 0));

        // Start chapter: start verse is word-bounded, later verses are whole
        assert!(!contains_word(&range, &key(1, 30), 2));
        assert!(contains_word(&range, &key(1, 30), 3));
        assert!(contains_word(&range, &key(1, 31), 0));
        assert!(!contains_word(&range, &key(1, 29), 9));

        // Middle chapter: everything
        assert!(contains_word(&range, &key(2, 1), 0));
        assert!(contains_word(&range, &key(2, 25), 17));
        assert!(contains_verse(&range, &key(2, 25)));

        // End chapter: earlier verses are whole, end verse is word-bounded
        assert!(contains_word(&range, &key(3, 1), 30));
        assert!(contains_word(&range, &key(3, 2), 0));
        assert!(!contains_word(&range, &key(3, 2), 1));
        assert!(!contains_word(&range, &key(3, 3), 0));

        assert!(!contains_verse(&range, &key(4, 1)));
        assert!(!contains_verse(&range, &key(1, 29)));
    }

    #[test]
    fn test_book_mismatch_fails_closed() {
        let range = Range::new(genesis(1, 1, 0), Position::new("Ex", 1, 1, 0));

        for book in ["Gen", "Ex"] {
            for verse in 1..5 {
                let key = VerseKey::new(book, 1, verse);
                assert!(!contains_verse(&range, &key));
                for word in 0..5 {
                    assert!(!contains_word(&range, &key, word));
                }
            }
        }
        assert!(!overlaps_chapter(&range, "Gen", 1));
    }

    #[test]
    fn test_other_book_never_matches() {
        let range = Range::new(genesis(1, 1, 0), genesis(50, 26, 0));
        let key = VerseKey::new("Ex", 2, 1);
        assert!(!contains_verse(&range, &key));
        assert!(!contains_word(&range, &key, 0));
    }

    #[test]
    fn test_verse_and_word_agree() {
        let ranges = [
            Range::new(genesis(1, 1, 2), genesis(1, 3, 1)),
            Range::new(genesis(1, 30, 3), genesis(3, 2, 0)),
            Range::new(genesis(2, 4, 0), genesis(2, 4, 0)),
        ];

        for range in &ranges {
            for chapter in 1..=4 {
                for verse in 1..=32 {
                    let verse_key = key(chapter, verse);
                    let any_word = (0..20).any(|w| contains_word(range, &verse_key, w));
                    assert_eq!(
                        contains_verse(range, &verse_key),
                        any_word,
                        "{} in {}",
                        verse_key,
                        range
                    );
                }
            }
        }
    }

    #[test]
    fn test_overlaps_chapter() {
        let range = Range::new(genesis(1, 30, 3), genesis(3, 2, 0));
        assert!(overlaps_chapter(&range, "Gen", 1));
        assert!(overlaps_chapter(&range, "Gen", 2));
        assert!(overlaps_chapter(&range, "Gen", 3));
        assert!(!overlaps_chapter(&range, "Gen", 4));
        assert!(!overlaps_chapter(&range, "Ex", 2));
    }
}
