//! Bible version database operations

use sqlx::SqlitePool;

use crate::error::{AppError, Result};
use crate::models::{CreateVersion, Version, VersionId};

/// Version repository
pub struct VersionRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> VersionRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// All versions, ordered by name
    pub async fn list(&self) -> Result<Vec<Version>> {
        let versions = sqlx::query_as::<_, Version>(
            r#"
            SELECT id, abbreviation, name, full_name
            FROM bible_versions
            ORDER BY name
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(versions)
    }

    pub async fn get(&self, id: VersionId) -> Result<Option<Version>> {
        let version = sqlx::query_as::<_, Version>(
            r#"
            SELECT id, abbreviation, name, full_name
            FROM bible_versions
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(version)
    }

    /// Abbreviation of a version, if it exists
    pub async fn abbreviation(&self, id: VersionId) -> Result<Option<String>> {
        Ok(self.get(id).await?.map(|v| v.abbreviation))
    }

    pub async fn create(&self, data: &CreateVersion) -> Result<Version> {
        let abbreviation = data.abbreviation.trim();
        let name = data.name.trim();
        if abbreviation.is_empty() || name.is_empty() {
            return Err(AppError::BadRequest(
                "abbreviation and name are required".to_string(),
            ));
        }

        let id = sqlx::query(
            r#"
            INSERT INTO bible_versions (abbreviation, name, full_name)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(abbreviation)
        .bind(name)
        .bind(&data.full_name)
        .execute(self.pool)
        .await
        .map_err(|e| AppError::constraint(e, "Version abbreviation already exists"))?
        .last_insert_rowid();

        tracing::info!("Created version {} ({})", abbreviation, id);

        self.get(id)
            .await?
            .ok_or_else(|| AppError::Internal("Failed to retrieve created version".to_string()))
    }
}
