//! Database schema initialization

use sqlx::SqlitePool;

use crate::error::Result;

/// Initialize the database schema
pub async fn initialize_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(SCHEMA_SQL)
        .execute(pool)
        .await?;

    Ok(())
}

const SCHEMA_SQL: &str = r#"
-- Bible versions (translations)
CREATE TABLE IF NOT EXISTS bible_versions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    abbreviation TEXT NOT NULL UNIQUE,
    name TEXT NOT NULL,
    full_name TEXT,
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- Verses, one row per version
CREATE TABLE IF NOT EXISTS scripture (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    version_id INTEGER NOT NULL,
    book TEXT NOT NULL,
    chapter INTEGER NOT NULL,
    verse INTEGER NOT NULL,
    text TEXT NOT NULL,
    format_type TEXT NOT NULL DEFAULT 'paragraph',
    created_at TEXT NOT NULL DEFAULT (datetime('now')),

    FOREIGN KEY (version_id) REFERENCES bible_versions (id) ON DELETE CASCADE,
    UNIQUE(version_id, book, chapter, verse)
);

CREATE INDEX IF NOT EXISTS idx_scripture_book_chapter ON scripture(book, chapter);

CREATE TABLE IF NOT EXISTS topics (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE,
    description TEXT,
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- Direct verse-topic links
CREATE TABLE IF NOT EXISTS scripture_topics (
    scripture_id INTEGER NOT NULL,
    topic_id INTEGER NOT NULL,

    PRIMARY KEY (scripture_id, topic_id),
    FOREIGN KEY (scripture_id) REFERENCES scripture (id) ON DELETE CASCADE,
    FOREIGN KEY (topic_id) REFERENCES topics (id) ON DELETE CASCADE
);

-- Word-range tags; positions are stored as "Gen 1:1.1" (1-based word)
CREATE TABLE IF NOT EXISTS scripture_tags (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    topic_id INTEGER,
    version TEXT NOT NULL,
    start_position TEXT NOT NULL,
    end_position TEXT NOT NULL,
    created_at TEXT NOT NULL DEFAULT (datetime('now')),

    FOREIGN KEY (topic_id) REFERENCES topics (id) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_scripture_tags_version ON scripture_tags(version);
CREATE INDEX IF NOT EXISTS idx_scripture_tags_topic ON scripture_tags(topic_id);
"#;
