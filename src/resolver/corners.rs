//! Highlight run detection
//!
//! Finds where maximal runs of highlighted units begin and end in a reading
//! order sequence, so a renderer can round the outer corners of each run.

use std::collections::BTreeSet;

/// Indices where highlighted runs start and end
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corners {
    pub starts: BTreeSet<usize>,
    pub ends: BTreeSet<usize>,
}

/// Scan the flags once, comparing each highlighted unit with its neighbours.
///
/// A single highlighted unit is both a start and an end.
pub fn adjacency_corners(flags: &[bool]) -> Corners {
    let mut corners = Corners::default();

    for (i, &highlighted) in flags.iter().enumerate() {
        if !highlighted {
            continue;
        }

        let prev = i.checked_sub(1).map(|p| flags[p]).unwrap_or(false);
        let next = flags.get(i + 1).copied().unwrap_or(false);

        if !prev {
            corners.starts.insert(i);
        }
        if !next {
            corners.ends.insert(i);
        }
    }

    corners
}
