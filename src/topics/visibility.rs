//! Visibility projection
//!
//! Restricts the topic list to topics that touch a currently visible verse.

use std::collections::BTreeSet;

use super::index::TopicIndex;
use crate::models::{Topic, VerseId};

/// Topics touching at least one visible verse, in their original order.
///
/// Before any visibility data has arrived (`visible` is empty) every topic
/// is returned so the list is never spuriously empty.
pub fn project<'a>(
    topics: &'a [Topic],
    index: &TopicIndex,
    visible: &BTreeSet<VerseId>,
) -> Vec<&'a Topic> {
    if visible.is_empty() {
        return topics.iter().collect();
    }

    topics
        .iter()
        .filter(|topic| index.touches_any(topic.id, visible))
        .collect()
}
