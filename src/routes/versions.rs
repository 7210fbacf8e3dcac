//! Bible version API routes

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use crate::db::VersionRepository;
use crate::error::Result;
use crate::models::{CreateVersion, Version};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/versions", get(list_versions).post(create_version))
}

/// List all versions
async fn list_versions(State(state): State<AppState>) -> Result<Json<Vec<Version>>> {
    let versions = VersionRepository::new(state.db()).list().await?;
    Ok(Json(versions))
}

/// Register a new version
async fn create_version(
    State(state): State<AppState>,
    Json(data): Json<CreateVersion>,
) -> Result<(StatusCode, Json<Version>)> {
    let version = VersionRepository::new(state.db()).create(&data).await?;
    Ok((StatusCode::CREATED, Json(version)))
}
