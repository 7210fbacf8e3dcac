//! Remote source over the service's JSON API

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::{ScriptureSource, SourceError};
use crate::models::{CreateTag, CreateTopic, Tag, Topic, Verse, VerseId, Version, VersionId};

/// Error body returned by the service
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// [`ScriptureSource`] backed by a running verse-index service
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn default_url() -> Self {
        Self::new("http://localhost:5001")
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn chapter_query(chapter: u32, version_id: Option<VersionId>) -> Vec<(&'static str, String)> {
        let mut query = vec![("chapter", chapter.to_string())];
        if let Some(id) = version_id {
            query.push(("version_id", id.to_string()));
        }
        query
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, SourceError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.message,
            Err(_) => status.canonical_reason().unwrap_or("request failed").to_string(),
        };

        if status == StatusCode::NOT_FOUND {
            Err(SourceError::NotFound(message))
        } else {
            Err(SourceError::Rejected {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl ScriptureSource for HttpSource {
    async fn get_chapter_verses(
        &self,
        book: &str,
        chapter: u32,
        version_id: Option<VersionId>,
    ) -> Result<Vec<Verse>, SourceError> {
        let url = self.url(&format!("/api/scripture/book/{}", urlencoding::encode(book)));
        self.send(self.client.get(url).query(&Self::chapter_query(chapter, version_id)))
            .await
    }

    async fn get_verse(&self, verse_id: VerseId) -> Result<Verse, SourceError> {
        let url = self.url(&format!("/api/scripture/{}", verse_id));
        self.send(self.client.get(url)).await
    }

    async fn get_chapter_tags(
        &self,
        book: &str,
        chapter: u32,
        version_id: Option<VersionId>,
    ) -> Result<Vec<Tag>, SourceError> {
        let mut query = Self::chapter_query(chapter, version_id);
        query.push(("book", book.to_string()));
        self.send(self.client.get(self.url("/api/scripture/tags")).query(&query))
            .await
    }

    async fn get_verse_topics(&self, verse_id: VerseId) -> Result<Vec<Topic>, SourceError> {
        let url = self.url(&format!("/api/scripture/{}/topics", verse_id));
        self.send(self.client.get(url)).await
    }

    async fn get_chapter_topics(
        &self,
        book: &str,
        chapter: u32,
        version_id: Option<VersionId>,
    ) -> Result<Vec<Topic>, SourceError> {
        let mut query = Self::chapter_query(chapter, version_id);
        query.push(("book", book.to_string()));
        self.send(self.client.get(self.url("/api/scripture/topics")).query(&query))
            .await
    }

    async fn get_all_topics(&self) -> Result<Vec<Topic>, SourceError> {
        self.send(self.client.get(self.url("/api/topics"))).await
    }

    async fn get_versions(&self) -> Result<Vec<Version>, SourceError> {
        self.send(self.client.get(self.url("/api/versions"))).await
    }

    async fn create_topic(&self, topic: &CreateTopic) -> Result<Topic, SourceError> {
        self.send(self.client.post(self.url("/api/topics")).json(topic))
            .await
    }

    async fn create_tag(&self, tag: &CreateTag) -> Result<Tag, SourceError> {
        self.send(self.client.post(self.url("/api/scripture/tags")).json(tag))
            .await
    }
}
