//! Topic database operations

use std::collections::BTreeSet;

use sqlx::SqlitePool;

use super::{ScriptureRepository, TagRepository};
use crate::error::{AppError, Result};
use crate::models::{CreateTopic, Topic, TopicId, VersionId};

/// Topic repository
pub struct TopicRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> TopicRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// All topics, ordered by name
    pub async fn list(&self) -> Result<Vec<Topic>> {
        let topics = sqlx::query_as::<_, Topic>(
            r#"
            SELECT id, name, description
            FROM topics
            ORDER BY name
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(topics)
    }

    pub async fn get(&self, id: TopicId) -> Result<Option<Topic>> {
        let topic = sqlx::query_as::<_, Topic>(
            r#"
            SELECT id, name, description
            FROM topics
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(topic)
    }

    pub async fn create(&self, data: &CreateTopic) -> Result<Topic> {
        let name = data.name.trim();
        if name.is_empty() {
            return Err(AppError::BadRequest("Topic name is required".to_string()));
        }

        let id = sqlx::query(
            r#"
            INSERT INTO topics (name, description)
            VALUES (?, ?)
            "#,
        )
        .bind(name)
        .bind(&data.description)
        .execute(self.pool)
        .await
        .map_err(|e| AppError::constraint(e, "Topic name already exists"))?
        .last_insert_rowid();

        tracing::info!("Created topic {} ({})", name, id);

        self.get(id)
            .await?
            .ok_or_else(|| AppError::Internal("Failed to retrieve created topic".to_string()))
    }

    /// Topics touching a chapter: linked directly to one of its verses, or
    /// owning a tag whose range overlaps it. Ordered by name.
    pub async fn for_chapter(
        &self,
        book: &str,
        chapter: u32,
        version_id: Option<VersionId>,
    ) -> Result<Vec<Topic>> {
        let mut ids: BTreeSet<TopicId> = ScriptureRepository::new(self.pool)
            .topics_for_chapter(book, chapter, version_id)
            .await?
            .into_iter()
            .map(|t| t.id)
            .collect();

        ids.extend(
            TagRepository::new(self.pool)
                .for_chapter(book, chapter, version_id)
                .await?
                .into_iter()
                .filter_map(|tag| tag.topic_id),
        );

        let topics = self
            .list()
            .await?
            .into_iter()
            .filter(|t| ids.contains(&t.id))
            .collect();

        Ok(topics)
    }
}
