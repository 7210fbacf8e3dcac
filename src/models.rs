//! Scripture entities shared by the service, the data-access layer and the
//! reading core.
//!
//! Tags carry their endpoints in the textual position form
//! (`"Gen 1:1.1"`); they are parsed on demand through [`Tag::range`] so that
//! a malformed stored position only disables that one tag.

use serde::{Deserialize, Serialize};

use crate::reference::{self, Range, VerseKey};

pub type VerseId = i64;
pub type TopicId = i64;
pub type TagId = i64;
pub type VersionId = i64;

/// A translation of the text (e.g. WEB, KJV)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Version {
    pub id: VersionId,
    pub abbreviation: String,
    pub name: String,
    pub full_name: Option<String>,
}

/// Layout hint for a verse
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum FormatType {
    #[default]
    Paragraph,
    Poetry,
}

/// A single verse of one version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Verse {
    pub id: VerseId,
    pub version_id: VersionId,
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
    #[serde(default)]
    pub format_type: FormatType,
}

impl Verse {
    /// Whitespace-separated words, indexed from 0
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.text.split_whitespace()
    }

    pub fn word_count(&self) -> usize {
        self.words().count()
    }

    /// The (book abbreviation, chapter, verse) key used by range resolution
    pub fn key(&self) -> VerseKey {
        VerseKey::new(reference::abbreviation(&self.book), self.chapter, self.verse)
    }
}

/// A named subject that verses and tags are linked to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Topic {
    pub id: TopicId,
    pub name: String,
    pub description: Option<String>,
}

/// A persisted word span, optionally attached to a topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Tag {
    pub id: TagId,
    pub topic_id: Option<TopicId>,
    /// Abbreviation of the version the tag was made in
    pub version: String,
    pub start_position: String,
    pub end_position: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Tag {
    /// Parse both endpoints into a normalized range.
    ///
    /// Returns `None` when either endpoint is malformed; callers treat that
    /// as "matches nothing".
    pub fn range(&self) -> Option<Range> {
        let start = reference::parse(&self.start_position)?;
        let end = reference::parse(&self.end_position)?;
        Some(Range::new(start, end).normalize())
    }

    /// Display label of the tagged span (1-based word numbers)
    pub fn label(&self) -> String {
        match self.range() {
            Some(range) => range.label(),
            None => format!("{} - {}", self.start_position, self.end_position),
        }
    }
}

/// Create version request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateVersion {
    pub abbreviation: String,
    pub name: String,
    pub full_name: Option<String>,
}

/// Create verse request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateVerse {
    pub version_id: Option<VersionId>,
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
    pub format_type: Option<FormatType>,
}

/// Create topic request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTopic {
    pub name: String,
    pub description: Option<String>,
}

/// Create tag request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTag {
    pub topic_id: Option<TopicId>,
    pub version: Option<String>,
    pub start_position: Option<String>,
    pub end_position: Option<String>,
}

/// Link a topic to a verse
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkTopic {
    pub topic_id: Option<TopicId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(start: &str, end: &str) -> Tag {
        Tag {
            id: 1,
            topic_id: Some(3),
            version: "WEB".to_string(),
            start_position: start.to_string(),
            end_position: end.to_string(),
            created_at: None,
        }
    }

    #[test]
    fn test_verse_words() {
        let verse = Verse {
            id: 1,
            version_id: 1,
            book: "Genesis".to_string(),
            chapter: 1,
            verse: 1,
            text: "In the  beginning\tGod created".to_string(),
            format_type: FormatType::Paragraph,
        };

        assert_eq!(verse.word_count(), 5);
        assert_eq!(verse.words().nth(2), Some("beginning"));
        assert_eq!(verse.key(), VerseKey::new("Gen", 1, 1));
    }

    #[test]
    fn test_tag_range_is_normalized() {
        let range = tag("Gen 1:3.2", "Gen 1:1.1").range().unwrap();
        assert_eq!(range.start.verse, 1);
        assert_eq!(range.end.verse, 3);
    }

    #[test]
    fn test_tag_with_malformed_position() {
        let bad = tag("Gen 1:1", "Gen 1:2.4");
        assert!(bad.range().is_none());
        assert_eq!(bad.label(), "Gen 1:1 - Gen 1:2.4");
    }

    #[test]
    fn test_format_type_serde() {
        let json = serde_json::to_string(&FormatType::Poetry).unwrap();
        assert_eq!(json, "\"poetry\"");
    }
}
