//! Data access for the reading core
//!
//! The core never talks to storage directly; it goes through a
//! [`ScriptureSource`]. Two implementations exist:
//!
//! - [`crate::db::SqliteSource`]: in-process, straight over the SQLite pool
//! - [`HttpSource`]: remote, against the service's JSON API

mod http;

pub use http::HttpSource;

use async_trait::async_trait;
use thiserror::Error;

use crate::error::AppError;
use crate::models::{
    CreateTag, CreateTopic, Tag, Topic, Verse, VerseId, Version, VersionId,
};

/// Data access errors
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Store error: {0}")]
    Store(#[from] AppError),
}

/// Reads and writes scripture data on behalf of the reading core
#[async_trait]
pub trait ScriptureSource: Send + Sync {
    /// Verses of one chapter in reading order
    async fn get_chapter_verses(
        &self,
        book: &str,
        chapter: u32,
        version_id: Option<VersionId>,
    ) -> Result<Vec<Verse>, SourceError>;

    /// A single verse by id
    async fn get_verse(&self, verse_id: VerseId) -> Result<Verse, SourceError>;

    /// Tags whose range overlaps the chapter
    async fn get_chapter_tags(
        &self,
        book: &str,
        chapter: u32,
        version_id: Option<VersionId>,
    ) -> Result<Vec<Tag>, SourceError>;

    /// Topics linked directly to a verse
    async fn get_verse_topics(&self, verse_id: VerseId) -> Result<Vec<Topic>, SourceError>;

    /// Topics touching the chapter through direct links or tags
    async fn get_chapter_topics(
        &self,
        book: &str,
        chapter: u32,
        version_id: Option<VersionId>,
    ) -> Result<Vec<Topic>, SourceError>;

    async fn get_all_topics(&self) -> Result<Vec<Topic>, SourceError>;

    async fn get_versions(&self) -> Result<Vec<Version>, SourceError>;

    async fn create_topic(&self, topic: &CreateTopic) -> Result<Topic, SourceError>;

    async fn create_tag(&self, tag: &CreateTag) -> Result<Tag, SourceError>;
}
