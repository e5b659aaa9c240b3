//! Diary documents from a Sanity-style query API.
//!
//! Queries are GROQ strings sent as the `query` parameter; `$name` parameters
//! are JSON-encoded and the payload sits under `result`.

use super::{check_response, json_body, RemoteError};
use crate::config::CmsConfig;
use crate::model::{DiaryEntry, FullDiaryEntry};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;

pub const LIST_QUERY: &str = r#"*[_type == "diaryEntry"] | order(publishedAt desc) {
  "id": _id,
  title,
  "slug": slug.current,
  excerpt,
  author,
  publishedAt,
  readTime,
  category,
  image
}"#;

pub const DETAIL_QUERY: &str = r#"*[_type == "diaryEntry" && slug.current == $slug][0] {
  "id": _id,
  title,
  "slug": slug.current,
  author,
  publishedAt,
  image,
  body
}"#;

#[async_trait]
pub trait DiaryCms: Send + Sync {
    /// All entries, newest first.
    async fn list_entries(&self) -> Result<Vec<DiaryEntry>, RemoteError>;
    async fn entry_by_slug(&self, slug: &str) -> Result<Option<FullDiaryEntry>, RemoteError>;
}

#[derive(Deserialize)]
struct QueryResponse<T> {
    result: T,
}

pub struct SanityClient {
    http: reqwest::Client,
    query_url: String,
    token: Option<String>,
}

impl SanityClient {
    pub fn new(http: reqwest::Client, cfg: &CmsConfig) -> Self {
        Self {
            http,
            query_url: cfg.query_url(),
            token: Some(cfg.token.clone()).filter(|t| !t.is_empty()),
        }
    }

    async fn query<T: DeserializeOwned>(&self, params: &[(&str, String)]) -> Result<T, RemoteError> {
        let mut req = self.http.get(&self.query_url).query(params);
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        let resp = check_response(req.send().await?).await?;
        let body: QueryResponse<T> = json_body(resp).await?;
        Ok(body.result)
    }
}

/// Query-string pairs for a GROQ query with one `$slug` parameter.
fn slug_params(slug: &str) -> Vec<(&'static str, String)> {
    vec![
        ("query", DETAIL_QUERY.to_string()),
        ("$slug", serde_json::Value::String(slug.to_string()).to_string()),
    ]
}

#[async_trait]
impl DiaryCms for SanityClient {
    async fn list_entries(&self) -> Result<Vec<DiaryEntry>, RemoteError> {
        tracing::debug!("querying diary entries");
        let entries: Option<Vec<DiaryEntry>> = self.query(&[("query", LIST_QUERY.to_string())]).await?;
        Ok(entries.unwrap_or_default())
    }

    async fn entry_by_slug(&self, slug: &str) -> Result<Option<FullDiaryEntry>, RemoteError> {
        tracing::debug!(slug = %slug, "querying diary entry");
        self.query(&slug_params(slug)).await
    }
}
