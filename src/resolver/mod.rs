//! Range resolution
//!
//! Decides which verses and words a stored range covers. Every consumer
//! (topic index, topic highlighting, single-tag highlighting) goes through
//! [`contains_verse`] and [`contains_word`].
//!
//! # Usage
//!
//! ```
//! use verse_index::reference::{parse, Range, VerseKey};
//! use verse_index::resolver::{contains_verse, contains_word};
//!
//! let range = Range::new(parse("Gen 1:1.3").unwrap(), parse("Gen 1:3.2").unwrap());
//! let middle = VerseKey::new("Gen", 1, 2);
//! assert!(contains_verse(&range, &middle));
//! assert!(!contains_word(&range, &VerseKey::new("Gen", 1, 1), 0));
//! ```

mod containment;
mod corners;
mod highlight;

pub use containment::{contains_verse, contains_word, overlaps_chapter};
pub use corners::{adjacency_corners, Corners};
pub use highlight::{
    paint_ranges, paint_tags, paint_verses, render_units, Highlights, RenderUnit, UnitKind,
};

use crate::reference::Range;

/// Put a range in reading order (see [`Range::normalize`])
pub fn normalize(range: Range) -> Range {
    range.normalize()
}
