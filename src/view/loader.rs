//! Fetch everything a chapter view needs

use std::collections::BTreeMap;

use futures::future::join_all;

use super::context::ChapterContext;
use crate::models::{Tag, Topic, Verse, VerseId};
use crate::source::{ScriptureSource, SourceError};

/// Data for one chapter, ready to apply to a view
#[derive(Debug, Clone, Default)]
pub struct ChapterData {
    pub verses: Vec<Verse>,
    pub tags: Vec<Tag>,
    pub topics: Vec<Topic>,
    pub direct_links: BTreeMap<VerseId, Vec<Topic>>,
}

/// Load verses, tags and topics of the context's chapter.
///
/// Per-verse topic lookups run concurrently; a failed lookup is logged and
/// that verse is left without direct links.
pub async fn load_chapter(
    source: &dyn ScriptureSource,
    ctx: &ChapterContext,
) -> Result<ChapterData, SourceError> {
    let version_id = ctx.version_id();

    let (verses, tags, topics) = futures::try_join!(
        source.get_chapter_verses(&ctx.book, ctx.chapter, version_id),
        source.get_chapter_tags(&ctx.book, ctx.chapter, version_id),
        source.get_chapter_topics(&ctx.book, ctx.chapter, version_id),
    )?;

    let lookups = verses.iter().map(|verse| async move {
        (verse.id, source.get_verse_topics(verse.id).await)
    });

    let mut direct_links = BTreeMap::new();
    for (verse_id, result) in join_all(lookups).await {
        match result {
            Ok(linked) if !linked.is_empty() => {
                direct_links.insert(verse_id, linked);
            }
            Ok(_) => {}
            Err(e) => tracing::warn!("Failed to load topics for verse {}: {}", verse_id, e),
        }
    }

    tracing::debug!(
        "Loaded {} {}: {} verses, {} tags, {} topics",
        ctx.book,
        ctx.chapter,
        verses.len(),
        tags.len(),
        topics.len()
    );

    Ok(ChapterData {
        verses,
        tags,
        topics,
        direct_links,
    })
}
