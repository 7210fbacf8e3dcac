//! Database module for SQLite persistence
//!
//! Handles versions, verses, topics, verse-topic links and tags.

mod schema;
mod scripture;
mod source;
mod tags;
mod topics;
mod versions;

pub use schema::*;
pub use scripture::*;
pub use source::*;
pub use tags::*;
pub use topics::*;
pub use versions::*;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

use crate::error::Result;

/// Create a new database connection pool
pub async fn create_pool(database_url: &str) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    // Run migrations
    initialize_schema(&pool).await?;

    Ok(pool)
}

/// In-memory database with the schema applied.
///
/// A single connection, since every in-memory connection is its own
/// database.
#[cfg(test)]
pub(crate) async fn setup_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    initialize_schema(&pool).await.unwrap();
    pool
}

#[cfg(test)]
pub(crate) struct SeedData {
    pub version_id: crate::models::VersionId,
    /// Genesis 1:1, 1:2, 1:3, 2:1, then Exodus 1:1
    pub verse_ids: Vec<crate::models::VerseId>,
    /// "Creation" (linked to Genesis 1:1), then "Light"
    pub topic_ids: Vec<crate::models::TopicId>,
}

#[cfg(test)]
pub(crate) async fn seed_test_data(pool: &SqlitePool) -> SeedData {
    use crate::models::{CreateTopic, CreateVerse, CreateVersion};

    let version = VersionRepository::new(pool)
        .create(&CreateVersion {
            abbreviation: "WEB".to_string(),
            name: "World English Bible".to_string(),
            full_name: None,
        })
        .await
        .unwrap();

    let scripture = ScriptureRepository::new(pool);
    let mut verse_ids = Vec::new();
    for (book, chapter, verse, text) in [
        ("Genesis", 1, 1, "In the beginning God created the heavens and the earth."),
        ("Genesis", 1, 2, "The earth was formless and empty."),
        ("Genesis", 1, 3, "God said, Let there be light, and there was light."),
        ("Genesis", 2, 1, "The heavens, the earth, and all their vast array were finished."),
        ("Exodus", 1, 1, "Now these are the names of the sons of Israel."),
    ] {
        let created = scripture
            .create(&CreateVerse {
                version_id: Some(version.id),
                book: book.to_string(),
                chapter,
                verse,
                text: text.to_string(),
                format_type: None,
            })
            .await
            .unwrap();
        verse_ids.push(created.id);
    }

    let topics = TopicRepository::new(pool);
    let mut topic_ids = Vec::new();
    for name in ["Creation", "Light"] {
        let topic = topics
            .create(&CreateTopic {
                name: name.to_string(),
                description: None,
            })
            .await
            .unwrap();
        topic_ids.push(topic.id);
    }

    scripture.link_topic(verse_ids[0], topic_ids[0]).await.unwrap();

    SeedData {
        version_id: version.id,
        verse_ids,
        topic_ids,
    }
}
