//! Position Ordering
//!
//! Positions are ordered by (chapter, verse, word) inside one book. Book
//! identity is only an abbreviation, so positions in different books are
//! incomparable rather than guessed at.

use std::cmp::Ordering;

use super::types::*;

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.book_abbr != other.book_abbr {
            return None;
        }

        Some(
            (self.chapter, self.verse, self.word_index).cmp(&(
                other.chapter,
                other.verse,
                other.word_index,
            )),
        )
    }
}

impl Range {
    /// Put the endpoints in reading order.
    ///
    /// A range whose start comes after its end is swapped; ordered and
    /// cross-book ranges are returned unchanged.
    pub fn normalize(self) -> Range {
        match self.start.partial_cmp(&self.end) {
            Some(Ordering::Greater) => Range {
                start: self.end,
                end: self.start,
            },
            _ => self,
        }
    }

    /// Whether the endpoints are already in reading order
    pub fn is_normalized(&self) -> bool {
        matches!(
            self.start.partial_cmp(&self.end),
            Some(Ordering::Less) | Some(Ordering::Equal)
        )
    }
}

/// Determine if position `a` comes before `b` in the same book
pub fn is_before(a: &Position, b: &Position) -> bool {
    a < b
}

/// Compare two position strings, `None` if either is malformed or the
/// books differ
pub fn compare_position_strings(a: &str, b: &str) -> Option<Ordering> {
    let pos_a = super::parser::parse(a)?;
    let pos_b = super::parser::parse(b)?;
    pos_a.partial_cmp(&pos_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(chapter: u32, verse: u32, word: u32) -> Position {
        Position::new("Gen", chapter, verse, word)
    }

    #[test]
    fn test_ordering_within_book() {
        assert!(pos(1, 1, 4) < pos(1, 2, 0));
        assert!(pos(1, 31, 9) < pos(2, 1, 0));
        assert!(pos(1, 1, 2) < pos(1, 1, 3));
        assert!(is_before(&pos(1, 1, 0), &pos(3, 1, 0)));
        assert_eq!(pos(2, 2, 2).partial_cmp(&pos(2, 2, 2)), Some(Ordering::Equal));
    }

    #[test]
    fn test_cross_book_incomparable() {
        let genesis = pos(1, 1, 0);
        let exodus = Position::new("Ex", 1, 1, 0);
        assert_eq!(genesis.partial_cmp(&exodus), None);
        assert_eq!(exodus.partial_cmp(&genesis), None);
    }

    #[test]
    fn test_normalize_swaps_backwards_range() {
        let range = Range::new(pos(1, 3, 1), pos(1, 1, 2)).normalize();
        assert_eq!(range.start, pos(1, 1, 2));
        assert_eq!(range.end, pos(1, 3, 1));
        assert!(range.is_normalized());
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let ranges = [
            Range::new(pos(1, 1, 0), pos(1, 1, 4)),
            Range::new(pos(5, 2, 7), pos(1, 9, 0)),
            Range::single(pos(3, 3, 3)),
        ];

        for range in ranges {
            let once = range.normalize();
            assert!(once.start <= once.end);
            assert_eq!(once.clone().normalize(), once);
        }
    }

    #[test]
    fn test_normalize_leaves_cross_book_range() {
        let range = Range::new(Position::new("Gen", 2, 1, 0), Position::new("Ex", 1, 1, 0));
        assert_eq!(range.clone().normalize(), range);
        assert!(!range.is_normalized());
    }

    #[test]
    fn test_compare_position_strings() {
        assert_eq!(
            compare_position_strings("Gen 1:1.10", "Gen 1:1.2"),
            Some(Ordering::Greater)
        );
        assert_eq!(compare_position_strings("invalid", "Gen 1:1.1"), None);
        assert_eq!(compare_position_strings("Gen 1:1.1", "Ex 1:1.1"), None);
    }
}
