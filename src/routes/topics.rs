//! Topic API routes

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use crate::db::TopicRepository;
use crate::error::Result;
use crate::models::{CreateTopic, Topic};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/topics", get(list_topics).post(create_topic))
}

/// List all topics by name
async fn list_topics(State(state): State<AppState>) -> Result<Json<Vec<Topic>>> {
    let topics = TopicRepository::new(state.db()).list().await?;
    Ok(Json(topics))
}

async fn create_topic(
    State(state): State<AppState>,
    Json(data): Json<CreateTopic>,
) -> Result<(StatusCode, Json<Topic>)> {
    let topic = TopicRepository::new(state.db()).create(&data).await?;
    Ok((StatusCode::CREATED, Json(topic)))
}
