use serde::{Deserialize, Serialize};

use crate::models::{Version, VersionId};

/// The chapter and version a view is showing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterContext {
    /// Full book name, as stored with the verses
    pub book: String,
    pub chapter: u32,
    pub version: Option<Version>,
}

impl ChapterContext {
    pub fn new(book: impl Into<String>, chapter: u32, version: Option<Version>) -> Self {
        Self {
            book: book.into(),
            chapter,
            version,
        }
    }

    pub fn version_id(&self) -> Option<VersionId> {
        self.version.as_ref().map(|v| v.id)
    }
}

/// Identifies one navigation; loads started under an older token are stale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContextToken(pub(crate) u64);

/// Result of applying a finished load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    /// The view moved on; the data was dropped
    Stale,
}

/// Default version: WEB by abbreviation or full name, else the first one
pub fn pick_default_version<'a>(versions: &'a [Version], preferred: &str) -> Option<&'a Version> {
    versions
        .iter()
        .find(|v| v.abbreviation == preferred || v.name == preferred)
        .or_else(|| {
            versions
                .iter()
                .find(|v| v.abbreviation == "WEB" || v.name == "World English Bible")
        })
        .or_else(|| versions.first())
}
