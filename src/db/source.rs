//! In-process [`ScriptureSource`] over the SQLite pool

use async_trait::async_trait;
use sqlx::SqlitePool;

use super::{ScriptureRepository, TagRepository, TopicRepository, VersionRepository};
use crate::error::AppError;
use crate::models::{CreateTag, CreateTopic, Tag, Topic, Verse, VerseId, Version, VersionId};
use crate::source::{ScriptureSource, SourceError};

#[derive(Debug, Clone)]
pub struct SqliteSource {
    pool: SqlitePool,
}

impl SqliteSource {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Map store errors the way the HTTP API reports them
fn store_error(e: AppError) -> SourceError {
    match e {
        AppError::NotFound(message) => SourceError::NotFound(message),
        AppError::BadRequest(message) => SourceError::Rejected {
            status: 400,
            message,
        },
        other => SourceError::Store(other),
    }
}

#[async_trait]
impl ScriptureSource for SqliteSource {
    async fn get_chapter_verses(
        &self,
        book: &str,
        chapter: u32,
        version_id: Option<VersionId>,
    ) -> Result<Vec<Verse>, SourceError> {
        ScriptureRepository::new(&self.pool)
            .list_for_book(book, Some(chapter), version_id)
            .await
            .map_err(store_error)
    }

    async fn get_verse(&self, verse_id: VerseId) -> Result<Verse, SourceError> {
        ScriptureRepository::new(&self.pool)
            .get(verse_id)
            .await
            .map_err(store_error)?
            .ok_or_else(|| SourceError::NotFound(format!("Verse {}", verse_id)))
    }

    async fn get_chapter_tags(
        &self,
        book: &str,
        chapter: u32,
        version_id: Option<VersionId>,
    ) -> Result<Vec<Tag>, SourceError> {
        TagRepository::new(&self.pool)
            .for_chapter(book, chapter, version_id)
            .await
            .map_err(store_error)
    }

    async fn get_verse_topics(&self, verse_id: VerseId) -> Result<Vec<Topic>, SourceError> {
        ScriptureRepository::new(&self.pool)
            .topics_for_verse(verse_id)
            .await
            .map_err(store_error)
    }

    async fn get_chapter_topics(
        &self,
        book: &str,
        chapter: u32,
        version_id: Option<VersionId>,
    ) -> Result<Vec<Topic>, SourceError> {
        TopicRepository::new(&self.pool)
            .for_chapter(book, chapter, version_id)
            .await
            .map_err(store_error)
    }

    async fn get_all_topics(&self) -> Result<Vec<Topic>, SourceError> {
        TopicRepository::new(&self.pool).list().await.map_err(store_error)
    }

    async fn get_versions(&self) -> Result<Vec<Version>, SourceError> {
        VersionRepository::new(&self.pool).list().await.map_err(store_error)
    }

    async fn create_topic(&self, topic: &CreateTopic) -> Result<Topic, SourceError> {
        TopicRepository::new(&self.pool)
            .create(topic)
            .await
            .map_err(store_error)
    }

    async fn create_tag(&self, tag: &CreateTag) -> Result<Tag, SourceError> {
        TagRepository::new(&self.pool)
            .create(tag)
            .await
            .map_err(store_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{seed_test_data, setup_test_db};

    #[tokio::test]
    async fn test_missing_verse_is_not_found() {
        let pool = setup_test_db().await;
        let source = SqliteSource::new(pool);

        let err = source.get_verse(404).await.unwrap_err();
        assert!(matches!(err, SourceError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_validation_is_rejected() {
        let pool = setup_test_db().await;
        let source = SqliteSource::new(pool);

        let err = source
            .create_topic(&CreateTopic {
                name: String::new(),
                description: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::Rejected { status: 400, .. }));
    }

    #[tokio::test]
    async fn test_chapter_verses() {
        let pool = setup_test_db().await;
        let seed = seed_test_data(&pool).await;
        let source = SqliteSource::new(pool);

        let verses = source
            .get_chapter_verses("Genesis", 1, Some(seed.version_id))
            .await
            .unwrap();
        assert_eq!(verses.len(), 3);
        assert_eq!(source.get_versions().await.unwrap().len(), 1);
    }
}
