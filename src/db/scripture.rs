//! Verse database operations

use sqlx::SqlitePool;

use crate::error::{AppError, Result};
use crate::models::{CreateVerse, Topic, TopicId, Verse, VerseId, VersionId};

/// Version used when a verse is created without one
const DEFAULT_VERSION_ID: VersionId = 1;

/// Verse repository
pub struct ScriptureRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ScriptureRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get(&self, id: VerseId) -> Result<Option<Verse>> {
        let verse = sqlx::query_as::<_, Verse>(
            r#"
            SELECT id, version_id, book, chapter, verse, text, format_type
            FROM scripture
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(verse)
    }

    /// Loose search: book name substring and/or exact chapter
    pub async fn search(&self, book: Option<&str>, chapter: Option<u32>) -> Result<Vec<Verse>> {
        let pattern = book.filter(|b| !b.is_empty()).map(|b| format!("%{}%", b));

        let verses = sqlx::query_as::<_, Verse>(
            r#"
            SELECT id, version_id, book, chapter, verse, text, format_type
            FROM scripture
            WHERE (? IS NULL OR book LIKE ?)
              AND (? IS NULL OR chapter = ?)
            ORDER BY book, chapter, verse
            "#,
        )
        .bind(&pattern)
        .bind(&pattern)
        .bind(chapter)
        .bind(chapter)
        .fetch_all(self.pool)
        .await?;

        Ok(verses)
    }

    /// Verses of a book, optionally restricted to a chapter and version,
    /// in reading order
    pub async fn list_for_book(
        &self,
        book: &str,
        chapter: Option<u32>,
        version_id: Option<VersionId>,
    ) -> Result<Vec<Verse>> {
        let verses = sqlx::query_as::<_, Verse>(
            r#"
            SELECT id, version_id, book, chapter, verse, text, format_type
            FROM scripture
            WHERE book = ?
              AND (? IS NULL OR chapter = ?)
              AND (? IS NULL OR version_id = ?)
            ORDER BY chapter, verse
            "#,
        )
        .bind(book)
        .bind(chapter)
        .bind(chapter)
        .bind(version_id)
        .bind(version_id)
        .fetch_all(self.pool)
        .await?;

        Ok(verses)
    }

    /// Distinct chapter numbers available for a book
    pub async fn chapters(&self, book: &str, version_id: Option<VersionId>) -> Result<Vec<u32>> {
        let rows: Vec<(u32,)> = sqlx::query_as(
            r#"
            SELECT DISTINCT chapter
            FROM scripture
            WHERE book = ? AND (? IS NULL OR version_id = ?)
            ORDER BY chapter
            "#,
        )
        .bind(book)
        .bind(version_id)
        .bind(version_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(|(chapter,)| chapter).collect())
    }

    pub async fn create(&self, data: &CreateVerse) -> Result<Verse> {
        if data.book.trim().is_empty() || data.chapter == 0 || data.verse == 0 {
            return Err(AppError::BadRequest(
                "book, chapter and verse are required".to_string(),
            ));
        }

        let id = sqlx::query(
            r#"
            INSERT INTO scripture (version_id, book, chapter, verse, text, format_type)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(data.version_id.unwrap_or(DEFAULT_VERSION_ID))
        .bind(data.book.trim())
        .bind(data.chapter)
        .bind(data.verse)
        .bind(&data.text)
        .bind(data.format_type.unwrap_or_default())
        .execute(self.pool)
        .await
        .map_err(|e| {
            AppError::constraint(e, "This verse already exists for this version or the version is unknown")
        })?
        .last_insert_rowid();

        self.get(id)
            .await?
            .ok_or_else(|| AppError::Internal("Failed to retrieve created verse".to_string()))
    }

    /// Topics linked directly to a verse, ordered by name
    pub async fn topics_for_verse(&self, id: VerseId) -> Result<Vec<Topic>> {
        let topics = sqlx::query_as::<_, Topic>(
            r#"
            SELECT t.id, t.name, t.description
            FROM topics t
            JOIN scripture_topics st ON t.id = st.topic_id
            WHERE st.scripture_id = ?
            ORDER BY t.name
            "#,
        )
        .bind(id)
        .fetch_all(self.pool)
        .await?;

        Ok(topics)
    }

    /// Topics linked directly to any verse of a chapter
    pub async fn topics_for_chapter(
        &self,
        book: &str,
        chapter: u32,
        version_id: Option<VersionId>,
    ) -> Result<Vec<Topic>> {
        let topics = sqlx::query_as::<_, Topic>(
            r#"
            SELECT DISTINCT t.id, t.name, t.description
            FROM topics t
            JOIN scripture_topics st ON t.id = st.topic_id
            JOIN scripture s ON st.scripture_id = s.id
            WHERE s.book = ? AND s.chapter = ?
              AND (? IS NULL OR s.version_id = ?)
            ORDER BY t.name
            "#,
        )
        .bind(book)
        .bind(chapter)
        .bind(version_id)
        .bind(version_id)
        .fetch_all(self.pool)
        .await?;

        Ok(topics)
    }

    pub async fn link_topic(&self, verse_id: VerseId, topic_id: TopicId) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO scripture_topics (scripture_id, topic_id)
            VALUES (?, ?)
            "#,
        )
        .bind(verse_id)
        .bind(topic_id)
        .execute(self.pool)
        .await
        .map_err(|e| AppError::constraint(e, "Topic is already linked to this verse"))?;

        tracing::info!("Linked topic {} to verse {}", topic_id, verse_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{seed_test_data, setup_test_db};
    use crate::models::FormatType;

    #[tokio::test]
    async fn test_list_for_book_in_reading_order() {
        let pool = setup_test_db().await;
        let seed = seed_test_data(&pool).await;
        let repo = ScriptureRepository::new(&pool);

        let verses = repo
            .list_for_book("Genesis", Some(1), Some(seed.version_id))
            .await
            .unwrap();
        let numbers: Vec<u32> = verses.iter().map(|v| v.verse).collect();
        assert_eq!(numbers, vec![1, 2, 3]);

        let all = repo.list_for_book("Genesis", None, None).await.unwrap();
        assert_eq!(all.len(), 4);
    }

    #[tokio::test]
    async fn test_chapters() {
        let pool = setup_test_db().await;
        let seed = seed_test_data(&pool).await;
        let repo = ScriptureRepository::new(&pool);

        assert_eq!(repo.chapters("Genesis", None).await.unwrap(), vec![1, 2]);
        assert_eq!(
            repo.chapters("Genesis", Some(seed.version_id + 1)).await.unwrap(),
            Vec::<u32>::new()
        );
    }

    #[tokio::test]
    async fn test_search_by_substring() {
        let pool = setup_test_db().await;
        seed_test_data(&pool).await;
        let repo = ScriptureRepository::new(&pool);

        assert_eq!(repo.search(Some("enes"), Some(2)).await.unwrap().len(), 1);
        assert_eq!(repo.search(None, None).await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_duplicate_verse_rejected() {
        let pool = setup_test_db().await;
        let seed = seed_test_data(&pool).await;
        let repo = ScriptureRepository::new(&pool);

        let err = repo
            .create(&CreateVerse {
                version_id: Some(seed.version_id),
                book: "Genesis".to_string(),
                chapter: 1,
                verse: 1,
                text: "again".to_string(),
                format_type: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_format_type_round_trip() {
        let pool = setup_test_db().await;
        let seed = seed_test_data(&pool).await;
        let repo = ScriptureRepository::new(&pool);

        let verse = repo
            .create(&CreateVerse {
                version_id: Some(seed.version_id),
                book: "Psalms".to_string(),
                chapter: 23,
                verse: 1,
                text: "The LORD is my shepherd".to_string(),
                format_type: Some(FormatType::Poetry),
            })
            .await
            .unwrap();
        assert_eq!(verse.format_type, FormatType::Poetry);
    }

    #[tokio::test]
    async fn test_link_topic() {
        let pool = setup_test_db().await;
        let seed = seed_test_data(&pool).await;
        let repo = ScriptureRepository::new(&pool);

        repo.link_topic(seed.verse_ids[1], seed.topic_ids[1]).await.unwrap();
        let err = repo
            .link_topic(seed.verse_ids[1], seed.topic_ids[1])
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));

        let topics = repo.topics_for_verse(seed.verse_ids[1]).await.unwrap();
        assert_eq!(topics.len(), 1);

        let chapter = repo
            .topics_for_chapter("Genesis", 1, Some(seed.version_id))
            .await
            .unwrap();
        assert_eq!(chapter.len(), 2);
    }
}
