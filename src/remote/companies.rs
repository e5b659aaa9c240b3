//! Upstream companies API, relayed verbatim on `GET /api/company-registration`.

use super::{check_response, json_body, RemoteError};
use async_trait::async_trait;
use serde_json::Value;

#[async_trait]
pub trait CompanyDirectory: Send + Sync {
    /// The upstream JSON payload, unmodified.
    async fn fetch_all(&self) -> Result<Value, RemoteError>;
}

pub struct HttpCompanyDirectory {
    http: reqwest::Client,
    url: String,
}

impl HttpCompanyDirectory {
    pub fn new(http: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }
}

#[async_trait]
impl CompanyDirectory for HttpCompanyDirectory {
    async fn fetch_all(&self) -> Result<Value, RemoteError> {
        tracing::debug!(url = %self.url, "fetching companies from upstream");
        let resp = self
            .http
            .get(&self.url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        json_body(check_response(resp).await?).await
    }
}
