//! Scripture API routes

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::db::{ScriptureRepository, TopicRepository};
use crate::error::{AppError, Result};
use crate::models::{CreateVerse, LinkTopic, Topic, Verse, VerseId, VersionId};
use crate::state::AppState;

/// Chapter selection shared by the scripture, topic and tag listings
#[derive(Debug, Default, Deserialize)]
pub struct ChapterQuery {
    pub book: Option<String>,
    pub chapter: Option<u32>,
    pub version_id: Option<VersionId>,
}

impl ChapterQuery {
    /// Book and chapter, when both are given
    pub fn chapter(&self) -> Option<(&str, u32)> {
        match (self.book.as_deref(), self.chapter) {
            (Some(book), Some(chapter)) if !book.is_empty() => Some((book, chapter)),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct VersionQuery {
    pub version_id: Option<VersionId>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/scripture", get(search_scripture).post(create_verse))
        .route("/scripture/book/:book", get(list_book))
        .route("/scripture/book/:book/chapters", get(list_chapters))
        .route("/scripture/topics", get(chapter_topics))
        .route("/scripture/:id", get(get_verse))
        .route("/scripture/:id/topics", get(verse_topics).post(link_topic))
}

/// Search verses by book substring and chapter
async fn search_scripture(
    State(state): State<AppState>,
    Query(query): Query<ChapterQuery>,
) -> Result<Json<Vec<Verse>>> {
    let verses = ScriptureRepository::new(state.db())
        .search(query.book.as_deref(), query.chapter)
        .await?;
    Ok(Json(verses))
}

async fn create_verse(
    State(state): State<AppState>,
    Json(data): Json<CreateVerse>,
) -> Result<(StatusCode, Json<Verse>)> {
    let verse = ScriptureRepository::new(state.db()).create(&data).await?;
    Ok((StatusCode::CREATED, Json(verse)))
}

/// Verses of a book, optionally one chapter and version
async fn list_book(
    State(state): State<AppState>,
    Path(book): Path<String>,
    Query(query): Query<ChapterQuery>,
) -> Result<Json<Vec<Verse>>> {
    let verses = ScriptureRepository::new(state.db())
        .list_for_book(&book, query.chapter, query.version_id)
        .await?;
    Ok(Json(verses))
}

async fn list_chapters(
    State(state): State<AppState>,
    Path(book): Path<String>,
    Query(query): Query<VersionQuery>,
) -> Result<Json<Vec<u32>>> {
    let chapters = ScriptureRepository::new(state.db())
        .chapters(&book, query.version_id)
        .await?;
    Ok(Json(chapters))
}

/// Topics touching a chapter through direct links or tags
async fn chapter_topics(
    State(state): State<AppState>,
    Query(query): Query<ChapterQuery>,
) -> Result<Json<Vec<Topic>>> {
    let (book, chapter) = query
        .chapter()
        .ok_or_else(|| AppError::BadRequest("book and chapter are required".to_string()))?;

    let topics = TopicRepository::new(state.db())
        .for_chapter(book, chapter, query.version_id)
        .await?;
    Ok(Json(topics))
}

async fn get_verse(
    State(state): State<AppState>,
    Path(id): Path<VerseId>,
) -> Result<Json<Verse>> {
    let verse = ScriptureRepository::new(state.db())
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Verse not found".to_string()))?;
    Ok(Json(verse))
}

/// Topics linked directly to a verse
async fn verse_topics(
    State(state): State<AppState>,
    Path(id): Path<VerseId>,
) -> Result<Json<Vec<Topic>>> {
    let topics = ScriptureRepository::new(state.db())
        .topics_for_verse(id)
        .await?;
    Ok(Json(topics))
}

/// Link a topic to a verse; returns the verse's topics
async fn link_topic(
    State(state): State<AppState>,
    Path(id): Path<VerseId>,
    Json(data): Json<LinkTopic>,
) -> Result<(StatusCode, Json<Vec<Topic>>)> {
    let topic_id = data
        .topic_id
        .ok_or_else(|| AppError::BadRequest("topic_id is required".to_string()))?;

    let repo = ScriptureRepository::new(state.db());
    if repo.get(id).await?.is_none() {
        return Err(AppError::NotFound("Verse not found".to_string()));
    }

    repo.link_topic(id, topic_id).await?;
    let topics = repo.topics_for_verse(id).await?;
    Ok((StatusCode::CREATED, Json(topics)))
}
