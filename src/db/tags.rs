//! Tag database operations

use chrono::Utc;
use sqlx::SqlitePool;

use super::VersionRepository;
use crate::error::{AppError, Result};
use crate::models::{CreateTag, Tag, VersionId};
use crate::reference::{self, Range};
use crate::resolver::overlaps_chapter;

/// Tag repository
pub struct TagRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> TagRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get(&self, id: i64) -> Result<Option<Tag>> {
        let tag = sqlx::query_as::<_, Tag>(
            r#"
            SELECT id, topic_id, version, start_position, end_position, created_at
            FROM scripture_tags
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(tag)
    }

    /// All tags, optionally of one version abbreviation
    pub async fn list(&self, version: Option<&str>) -> Result<Vec<Tag>> {
        let tags = sqlx::query_as::<_, Tag>(
            r#"
            SELECT id, topic_id, version, start_position, end_position, created_at
            FROM scripture_tags
            WHERE (? IS NULL OR version = ?)
            ORDER BY start_position, id
            "#,
        )
        .bind(version)
        .bind(version)
        .fetch_all(self.pool)
        .await?;

        Ok(tags)
    }

    /// Tags whose range overlaps a chapter.
    ///
    /// An unknown `version_id` applies no version filter. Tags with
    /// malformed positions never overlap anything.
    pub async fn for_chapter(
        &self,
        book: &str,
        chapter: u32,
        version_id: Option<VersionId>,
    ) -> Result<Vec<Tag>> {
        let version = match version_id {
            Some(id) => VersionRepository::new(self.pool).abbreviation(id).await?,
            None => None,
        };

        let book_abbr = reference::abbreviation(book);

        let tags = self
            .list(version.as_deref())
            .await?
            .into_iter()
            .filter(|tag| match tag.range() {
                Some(range) => overlaps_chapter(&range, &book_abbr, chapter),
                None => {
                    tracing::debug!("Skipping tag {} with malformed positions", tag.id);
                    false
                }
            })
            .collect();

        Ok(tags)
    }

    /// Validate and store a tag. Positions are stored normalized.
    pub async fn create(&self, data: &CreateTag) -> Result<Tag> {
        let version = data
            .version
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| AppError::BadRequest("version is required".to_string()))?;

        let (Some(start), Some(end)) = (&data.start_position, &data.end_position) else {
            return Err(AppError::BadRequest(
                "start_position and end_position are required".to_string(),
            ));
        };

        let range = parse_range(start, end)?;
        let now = Utc::now().to_rfc3339();

        let id = sqlx::query(
            r#"
            INSERT INTO scripture_tags (topic_id, version, start_position, end_position, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(data.topic_id)
        .bind(version)
        .bind(range.start.to_string())
        .bind(range.end.to_string())
        .bind(&now)
        .execute(self.pool)
        .await
        .map_err(|e| AppError::constraint(e, "Unknown topic"))?
        .last_insert_rowid();

        tracing::info!("Created tag {} ({} - {})", id, range.start, range.end);

        self.get(id)
            .await?
            .ok_or_else(|| AppError::Internal("Failed to retrieve created tag".to_string()))
    }
}

/// Parse both endpoints of a new tag into a normalized single-book range
fn parse_range(start: &str, end: &str) -> Result<Range> {
    let start = reference::try_parse(start)
        .map_err(|e| AppError::BadRequest(format!("Invalid start_position: {}", e)))?;
    let end = reference::try_parse(end)
        .map_err(|e| AppError::BadRequest(format!("Invalid end_position: {}", e)))?;

    let range = Range::new(start, end);
    if !range.is_single_book() {
        return Err(AppError::BadRequest(
            "start_position and end_position must be in the same book".to_string(),
        ));
    }

    Ok(range.normalize())
}
