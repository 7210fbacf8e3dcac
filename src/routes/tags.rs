//! Tag API routes

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use super::scripture::ChapterQuery;
use crate::db::{TagRepository, VersionRepository};
use crate::error::Result;
use crate::models::{CreateTag, Tag};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/scripture/tags", get(list_tags).post(create_tag))
}

/// Tags overlapping a chapter, or every tag when no chapter is given
async fn list_tags(
    State(state): State<AppState>,
    Query(query): Query<ChapterQuery>,
) -> Result<Json<Vec<Tag>>> {
    let repo = TagRepository::new(state.db());

    let tags = match query.chapter() {
        Some((book, chapter)) => repo.for_chapter(book, chapter, query.version_id).await?,
        None => {
            let version = match query.version_id {
                Some(id) => VersionRepository::new(state.db()).abbreviation(id).await?,
                None => None,
            };
            repo.list(version.as_deref()).await?
        }
    };

    Ok(Json(tags))
}

async fn create_tag(
    State(state): State<AppState>,
    Json(data): Json<CreateTag>,
) -> Result<(StatusCode, Json<Tag>)> {
    let tag = TagRepository::new(state.db()).create(&data).await?;
    Ok((StatusCode::CREATED, Json(tag)))
}
