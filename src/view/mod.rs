//! Chapter view state
//!
//! One [`ChapterView`] owns everything the reading screen derives from the
//! current chapter: loaded data, topic index, visibility, topic/tag
//! selection, and the word selection machine. Loads are tagged with a
//! [`ContextToken`] and dropped if the view navigated elsewhere meanwhile.
//!
//! ```no_run
//! # async fn run(source: &dyn verse_index::source::ScriptureSource) {
//! use verse_index::view::{load_chapter, ApplyOutcome, ChapterContext, ChapterView};
//!
//! let mut view = ChapterView::new();
//! let ctx = ChapterContext::new("Genesis", 1, None);
//! let token = view.navigate(ctx.clone());
//! if let Ok(data) = load_chapter(source, &ctx).await {
//!     assert_eq!(view.apply(token, data), ApplyOutcome::Applied);
//! }
//! # }
//! ```

mod context;
mod loader;

pub use context::{pick_default_version, ApplyOutcome, ChapterContext, ContextToken};
pub use loader::{load_chapter, ChapterData};

use std::collections::{BTreeMap, BTreeSet};

use crate::models::{Tag, TagId, Topic, TopicId, Verse, VerseId};
use crate::resolver::{self, Highlights, RenderUnit};
use crate::selection::{self, CommitError, SelectionMachine, TopicChoice};
use crate::source::{ScriptureSource, SourceError};
use crate::topics::{self, TopicIndex};

#[derive(Debug, Default)]
pub struct ChapterView {
    context: Option<ChapterContext>,
    generation: u64,
    verses: Vec<Verse>,
    tags: Vec<Tag>,
    topics: Vec<Topic>,
    direct_links: BTreeMap<VerseId, Vec<Topic>>,
    index: TopicIndex,
    visible: BTreeSet<VerseId>,
    expanded: BTreeSet<TopicId>,
    selected_topic: Option<TopicId>,
    selected_tag: Option<TagId>,
    selection: SelectionMachine,
}

impl ChapterView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch to a new chapter/version and reset everything derived from
    /// the old one. Loads must be applied with the returned token.
    pub fn navigate(&mut self, context: ChapterContext) -> ContextToken {
        self.generation += 1;
        self.context = Some(context);
        self.verses.clear();
        self.tags.clear();
        self.topics.clear();
        self.direct_links.clear();
        self.index = TopicIndex::default();
        self.visible.clear();
        self.reset_topic_state();
        self.selection.clear();
        self.token()
    }

    /// Token of the active context
    pub fn token(&self) -> ContextToken {
        ContextToken(self.generation)
    }

    pub fn context(&self) -> Option<&ChapterContext> {
        self.context.as_ref()
    }

    pub fn is_current(&self, token: ContextToken) -> bool {
        self.context.is_some() && token == self.token()
    }

    /// Apply a finished load, unless it belongs to an older context
    pub fn apply(&mut self, token: ContextToken, data: ChapterData) -> ApplyOutcome {
        if !self.is_current(token) {
            tracing::debug!(
                "Discarding stale chapter data (token {:?}, current {:?})",
                token,
                self.token()
            );
            return ApplyOutcome::Stale;
        }

        self.verses = data.verses;
        self.tags = data.tags;
        self.topics = data.topics;
        self.direct_links = data.direct_links;
        self.reset_topic_state();
        self.rebuild();
        ApplyOutcome::Applied
    }

    /// Recompute the topic index from the loaded data
    pub fn rebuild(&mut self) {
        self.index = topics::build(&self.topics, &self.verses, &self.direct_links, &self.tags);
    }

    fn reset_topic_state(&mut self) {
        self.selected_topic = None;
        self.selected_tag = None;
        self.expanded.clear();
    }

    pub fn verses(&self) -> &[Verse] {
        &self.verses
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn index(&self) -> &TopicIndex {
        &self.index
    }

    /// Replace the set of verses currently on screen
    pub fn set_visible(&mut self, verse_ids: impl IntoIterator<Item = VerseId>) {
        self.visible = verse_ids.into_iter().collect();
    }

    pub fn visible(&self) -> &BTreeSet<VerseId> {
        &self.visible
    }

    /// Topics to list for the verses on screen
    pub fn visible_topics(&self) -> Vec<&Topic> {
        topics::project(&self.topics, &self.index, &self.visible)
    }

    pub fn selected_topic(&self) -> Option<TopicId> {
        self.selected_topic
    }

    pub fn selected_tag(&self) -> Option<TagId> {
        self.selected_tag
    }

    /// Select a topic, or deselect it if already selected.
    ///
    /// Any change of topic collapses expanded topics and drops the
    /// selected tag.
    pub fn select_topic(&mut self, topic_id: TopicId) {
        self.expanded.clear();
        self.selected_tag = None;
        if self.selected_topic == Some(topic_id) {
            self.selected_topic = None;
        } else {
            self.selected_topic = Some(topic_id);
        }
    }

    /// Expand or collapse the tag list of the selected topic.
    ///
    /// Returns whether the topic is now expanded.
    pub fn toggle_expanded(&mut self, topic_id: TopicId) -> bool {
        if self.selected_topic != Some(topic_id) {
            return false;
        }
        if !self.expanded.remove(&topic_id) {
            self.expanded.insert(topic_id);
            return true;
        }
        false
    }

    pub fn is_expanded(&self, topic_id: TopicId) -> bool {
        self.expanded.contains(&topic_id)
    }

    /// Highlight a single tag, or clear it if already highlighted
    pub fn select_tag(&mut self, tag_id: TagId) {
        if self.selected_tag == Some(tag_id) {
            self.selected_tag = None;
        } else {
            self.selected_tag = Some(tag_id);
        }
    }

    /// Verses linked directly (not through tags) to a topic
    fn directly_linked(&self, topic_id: TopicId) -> BTreeSet<VerseId> {
        self.direct_links
            .iter()
            .filter(|(_, linked)| linked.iter().any(|t| t.id == topic_id))
            .map(|(verse_id, _)| *verse_id)
            .collect()
    }

    /// Words and verse numbers to highlight.
    ///
    /// A selected tag wins over the selected topic.
    pub fn highlights(&self) -> Highlights {
        if let Some(tag_id) = self.selected_tag {
            return resolver::paint_tags(&self.verses, self.tags.iter().filter(|t| t.id == tag_id));
        }

        let Some(topic_id) = self.selected_topic else {
            return Highlights::new();
        };

        let mut highlights = resolver::paint_tags(&self.verses, self.index.tags(topic_id));
        highlights.merge(resolver::paint_verses(
            &self.verses,
            &self.directly_linked(topic_id),
        ));
        highlights
    }

    /// Reading-order units with highlight runs for rendering
    pub fn render_units(&self) -> Vec<RenderUnit> {
        resolver::render_units(&self.verses, &self.highlights())
    }

    pub fn selection(&self) -> &SelectionMachine {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut SelectionMachine {
        &mut self.selection
    }

    /// Store the released word selection as a tag, then reload the chapter.
    ///
    /// On failure the selection stays as it was so the user can retry.
    pub async fn commit_selection(
        &mut self,
        source: &dyn ScriptureSource,
        choice: &TopicChoice,
    ) -> Result<Tag, CommitError> {
        let span = self.selection.pending().ok_or(CommitError::NothingSelected)?;
        let version = self.context.as_ref().and_then(|c| c.version.as_ref());

        let tag = match selection::commit(source, &self.verses, version, span, choice).await {
            Ok(tag) => tag,
            Err(e) => {
                tracing::warn!("Failed to create tag: {}", e);
                return Err(e);
            }
        };

        self.selection.clear();
        if let Err(e) = self.reload(source).await {
            tracing::warn!("Tag {} stored but chapter reload failed: {}", tag.id, e);
        }
        Ok(tag)
    }

    /// Reload the active context from `source`.
    ///
    /// Without a context there is nothing to load and the outcome is
    /// `Stale`. A failed load is returned as the error and leaves the view
    /// untouched.
    pub async fn reload(
        &mut self,
        source: &dyn ScriptureSource,
    ) -> Result<ApplyOutcome, SourceError> {
        let Some(ctx) = self.context.clone() else {
            return Ok(ApplyOutcome::Stale);
        };
        let token = self.token();
        let data = load_chapter(source, &ctx).await?;
        Ok(self.apply(token, data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FormatType;
    use crate::selection::WordRef;

    fn verse(id: VerseId, number: u32, text: &str) -> Verse {
        Verse {
            id,
            version_id: 1,
            book: "Genesis".to_string(),
            chapter: 1,
            verse: number,
            text: text.to_string(),
            format_type: FormatType::Paragraph,
        }
    }

    fn topic(id: TopicId, name: &str) -> Topic {
        Topic {
            id,
            name: name.to_string(),
            description: None,
        }
    }

    fn tag(id: TagId, topic_id: TopicId, start: &str, end: &str) -> Tag {
        Tag {
            id,
            topic_id: Some(topic_id),
            version: "WEB".to_string(),
            start_position: start.to_string(),
            end_position: end.to_string(),
            created_at: None,
        }
    }

    fn data() -> ChapterData {
        let creation = topic(1, "Creation");
        let light = topic(2, "Light");
        ChapterData {
            verses: vec![
                verse(10, 1, "In the beginning God created the heavens and the earth."),
                verse(11, 2, "The earth was formless and empty."),
                verse(12, 3, "God said, Let there be light, and there was light."),
            ],
            tags: vec![
                tag(100, 1, "Gen 1:1.1", "Gen 1:1.5"),
                tag(101, 2, "Gen 1:3.5", "Gen 1:3.6"),
            ],
            topics: vec![creation.clone(), light],
            direct_links: BTreeMap::from([(11, vec![creation])]),
        }
    }

    fn loaded() -> ChapterView {
        let mut view = ChapterView::new();
        let token = view.navigate(ChapterContext::new("Genesis", 1, None));
        assert_eq!(view.apply(token, data()), ApplyOutcome::Applied);
        view
    }

    #[test]
    fn test_apply_builds_index() {
        let view = loaded();
        assert_eq!(
            view.index().verse_ids(1).unwrap(),
            &BTreeSet::from([10, 11])
        );
        assert_eq!(view.index().verse_ids(2).unwrap(), &BTreeSet::from([12]));
    }

    #[test]
    fn test_stale_apply_is_discarded() {
        let mut view = ChapterView::new();
        let old = view.navigate(ChapterContext::new("Genesis", 1, None));
        let current = view.navigate(ChapterContext::new("Exodus", 2, None));

        assert_eq!(view.apply(old, data()), ApplyOutcome::Stale);
        assert!(view.verses().is_empty());
        assert!(view.index().topic_to_verse_ids.is_empty());
        assert_eq!(view.context().unwrap().book, "Exodus");
        assert!(view.is_current(current));
    }

    #[test]
    fn test_apply_before_navigate_is_stale() {
        let mut view = ChapterView::new();
        assert_eq!(view.apply(view.token(), data()), ApplyOutcome::Stale);
    }

    #[test]
    fn test_visible_topics() {
        let mut view = loaded();
        assert_eq!(view.visible_topics().len(), 2);

        view.set_visible([12]);
        let names: Vec<&str> = view.visible_topics().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Light"]);
    }

    #[test]
    fn test_select_topic_toggles_and_resets() {
        let mut view = loaded();
        view.select_topic(1);
        assert!(view.toggle_expanded(1));
        view.select_tag(100);

        view.select_topic(2);
        assert_eq!(view.selected_topic(), Some(2));
        assert!(!view.is_expanded(1));
        assert_eq!(view.selected_tag(), None);

        view.select_topic(2);
        assert_eq!(view.selected_topic(), None);
    }

    #[test]
    fn test_expand_only_selected_topic() {
        let mut view = loaded();
        assert!(!view.toggle_expanded(1));
        view.select_topic(1);
        assert!(view.toggle_expanded(1));
        assert!(!view.toggle_expanded(1));
        assert!(!view.is_expanded(1));
    }

    #[test]
    fn test_topic_highlights_merge_tags_and_links() {
        let mut view = loaded();
        view.select_topic(1);
        let highlights = view.highlights();

        assert!(highlights.is_word_highlighted(10, 0));
        assert!(highlights.is_word_highlighted(10, 4));
        assert!(!highlights.is_word_highlighted(10, 5));
        assert!(highlights.is_word_highlighted(11, 3));
        assert!(!highlights.is_verse_number_highlighted(12));
    }

    #[test]
    fn test_selected_tag_wins() {
        let mut view = loaded();
        view.select_topic(1);
        view.select_tag(101);
        let highlights = view.highlights();

        assert!(!highlights.is_word_highlighted(10, 0));
        assert!(highlights.is_word_highlighted(12, 4));
        assert!(highlights.is_word_highlighted(12, 5));

        view.select_tag(101);
        assert!(view.highlights().is_word_highlighted(10, 0));
    }

    #[test]
    fn test_navigate_clears_selection() {
        let mut view = loaded();
        view.selection_mut().press(WordRef::new(10, 0));
        view.selection_mut().release();
        view.select_topic(1);

        view.navigate(ChapterContext::new("Genesis", 2, None));
        assert!(view.selection().is_idle());
        assert_eq!(view.selected_topic(), None);
        assert!(view.render_units().is_empty());
    }

    #[test]
    fn test_render_units_follow_highlights() {
        let mut view = loaded();
        view.select_topic(2);
        let highlighted: Vec<_> = view
            .render_units()
            .into_iter()
            .filter(|u| u.highlighted)
            .collect();

        // verse-number marker of 3 plus "be" and "light,"
        assert_eq!(highlighted.len(), 3);
        assert!(highlighted[0].run_start);
    }
}
