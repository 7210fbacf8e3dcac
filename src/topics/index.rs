//! Topic index builder
//!
//! Aggregates direct verse-topic links and tag ranges into per-topic verse
//! sets and tag lists for one loaded chapter. The index is always rebuilt
//! from scratch; overlap is only correct when every tag is scanned against
//! every verse.

use std::collections::{BTreeMap, BTreeSet};

use crate::models::{Tag, Topic, TopicId, Verse, VerseId};
use crate::reference::VerseKey;
use crate::resolver::contains_verse;

/// Topic to verse and topic to tag mappings for one chapter view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicIndex {
    pub topic_to_verse_ids: BTreeMap<TopicId, BTreeSet<VerseId>>,
    pub topic_to_tags: BTreeMap<TopicId, Vec<Tag>>,
}

impl TopicIndex {
    /// Build the index for a chapter.
    ///
    /// Every topic gets an entry even if nothing references it. Links and
    /// tags pointing at topics outside `topics` are ignored.
    pub fn build(
        topics: &[Topic],
        verses: &[Verse],
        direct_links: &BTreeMap<VerseId, Vec<Topic>>,
        tags: &[Tag],
    ) -> Self {
        let mut index = TopicIndex::default();

        for topic in topics {
            index.topic_to_verse_ids.insert(topic.id, BTreeSet::new());
            index.topic_to_tags.insert(topic.id, Vec::new());
        }

        for verse in verses {
            let Some(linked) = direct_links.get(&verse.id) else {
                continue;
            };
            for topic in linked {
                if let Some(verse_ids) = index.topic_to_verse_ids.get_mut(&topic.id) {
                    verse_ids.insert(verse.id);
                }
            }
        }

        let keys: Vec<(VerseId, VerseKey)> = verses.iter().map(|v| (v.id, v.key())).collect();

        for tag in tags {
            let Some(topic_id) = tag.topic_id else {
                continue;
            };
            let Some(topic_tags) = index.topic_to_tags.get_mut(&topic_id) else {
                tracing::debug!("Tag {} references topic {} outside this chapter", tag.id, topic_id);
                continue;
            };
            topic_tags.push(tag.clone());

            let Some(range) = tag.range() else {
                tracing::debug!("Tag {} has malformed positions, skipping", tag.id);
                continue;
            };

            if let Some(verse_ids) = index.topic_to_verse_ids.get_mut(&topic_id) {
                verse_ids.extend(
                    keys.iter()
                        .filter(|(_, key)| contains_verse(&range, key))
                        .map(|(id, _)| *id),
                );
            }
        }

        index
    }

    /// Verses a topic touches in this chapter
    pub fn verse_ids(&self, topic_id: TopicId) -> Option<&BTreeSet<VerseId>> {
        self.topic_to_verse_ids.get(&topic_id)
    }

    /// Tags attached to a topic in this chapter
    pub fn tags(&self, topic_id: TopicId) -> &[Tag] {
        self.topic_to_tags
            .get(&topic_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether the topic touches any of the given verses
    pub fn touches_any(&self, topic_id: TopicId, verse_ids: &BTreeSet<VerseId>) -> bool {
        self.verse_ids(topic_id)
            .is_some_and(|ids| ids.iter().any(|id| verse_ids.contains(id)))
    }
}

/// Build the topic index for one chapter (see [`TopicIndex::build`])
pub fn build(
    topics: &[Topic],
    verses: &[Verse],
    direct_links: &BTreeMap<VerseId, Vec<Topic>>,
    tags: &[Tag],
) -> TopicIndex {
    TopicIndex::build(topics, verses, direct_links, tags)
}
