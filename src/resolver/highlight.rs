//! Highlight painting
//!
//! Turns tag ranges and direct verse links into per-word highlight state for
//! the verses of a chapter, and lays that state out as reading-order render
//! units with run corners.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use super::containment::contains_word;
use super::corners::adjacency_corners;
use crate::models::{FormatType, Tag, Verse, VerseId};
use crate::reference::Range;

/// Highlighted words keyed by verse
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Highlights {
    words: BTreeMap<VerseId, BTreeSet<u32>>,
}

impl Highlights {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn insert(&mut self, verse_id: VerseId, word_index: u32) {
        self.words.entry(verse_id).or_default().insert(word_index);
    }

    pub fn is_word_highlighted(&self, verse_id: VerseId, word_index: u32) -> bool {
        self.words
            .get(&verse_id)
            .is_some_and(|words| words.contains(&word_index))
    }

    /// A verse number is highlighted when any of its words is
    pub fn is_verse_number_highlighted(&self, verse_id: VerseId) -> bool {
        self.words.get(&verse_id).is_some_and(|words| !words.is_empty())
    }

    /// Verses with at least one highlighted word, in id order
    pub fn verse_ids(&self) -> impl Iterator<Item = VerseId> + '_ {
        self.words.keys().copied()
    }

    /// Highlighted word indices of one verse
    pub fn words_of(&self, verse_id: VerseId) -> impl Iterator<Item = u32> + '_ {
        self.words.get(&verse_id).into_iter().flatten().copied()
    }

    pub fn merge(&mut self, other: Highlights) {
        for (verse_id, words) in other.words {
            self.words.entry(verse_id).or_default().extend(words);
        }
    }
}

/// Paint every word of `verses` covered by any of `ranges`
pub fn paint_ranges<'a>(verses: &[Verse], ranges: impl IntoIterator<Item = &'a Range>) -> Highlights {
    let ranges: Vec<&Range> = ranges.into_iter().collect();
    let mut highlights = Highlights::new();

    for verse in verses {
        let key = verse.key();
        let word_count = verse.word_count() as u32;

        for range in &ranges {
            for word_index in 0..word_count {
                if contains_word(range, &key, word_index) {
                    highlights.insert(verse.id, word_index);
                }
            }
        }
    }

    highlights
}

/// Paint the spans of the given tags; tags with malformed positions paint
/// nothing
pub fn paint_tags<'a>(verses: &[Verse], tags: impl IntoIterator<Item = &'a Tag>) -> Highlights {
    let ranges: Vec<Range> = tags.into_iter().filter_map(Tag::range).collect();
    paint_ranges(verses, &ranges)
}

/// Paint whole verses (direct verse-topic links)
pub fn paint_verses(verses: &[Verse], verse_ids: &BTreeSet<VerseId>) -> Highlights {
    let mut highlights = Highlights::new();

    for verse in verses.iter().filter(|v| verse_ids.contains(&v.id)) {
        for word_index in 0..verse.word_count() as u32 {
            highlights.insert(verse.id, word_index);
        }
    }

    highlights
}

/// What a render unit displays
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UnitKind {
    /// Inline verse number (paragraph verses only)
    VerseNumber { number: u32 },
    /// One whitespace-separated word
    Word { index: u32, text: String },
}

/// One renderable unit in reading order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderUnit {
    pub verse_id: VerseId,
    #[serde(flatten)]
    pub kind: UnitKind,
    pub highlighted: bool,
    /// First unit of a highlighted run
    pub run_start: bool,
    /// Last unit of a highlighted run
    pub run_end: bool,
}

/// Lay out the chapter as verse numbers and words with highlight corners
pub fn render_units(verses: &[Verse], highlights: &Highlights) -> Vec<RenderUnit> {
    let mut units = Vec::new();

    for verse in verses {
        if verse.format_type == FormatType::Paragraph {
            units.push(RenderUnit {
                verse_id: verse.id,
                kind: UnitKind::VerseNumber { number: verse.verse },
                highlighted: highlights.is_verse_number_highlighted(verse.id),
                run_start: false,
                run_end: false,
            });
        }

        for (index, word) in verse.words().enumerate() {
            let index = index as u32;
            units.push(RenderUnit {
                verse_id: verse.id,
                kind: UnitKind::Word {
                    index,
                    text: word.to_string(),
                },
                highlighted: highlights.is_word_highlighted(verse.id, index),
                run_start: false,
                run_end: false,
            });
        }
    }

    let flags: Vec<bool> = units.iter().map(|u| u.highlighted).collect();
    let corners = adjacency_corners(&flags);
    for (i, unit) in units.iter_mut().enumerate() {
        unit.run_start = corners.starts.contains(&i);
        unit.run_end = corners.ends.contains(&i);
    }

    units
}
