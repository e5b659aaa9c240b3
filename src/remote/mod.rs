//! HTTP clients for the upstream companies API and the headless CMS.

pub mod cms;
pub mod companies;

pub use cms::{DiaryCms, SanityClient};
pub use companies::{CompanyDirectory, HttpCompanyDirectory};

use crate::error::ConfigError;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RemoteError {
    /// Transport failure (DNS, connect, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status code.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shared client with a request timeout.
pub fn http_client(timeout: Duration) -> Result<reqwest::Client, ConfigError> {
    reqwest::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .timeout(timeout)
        .build()
        .map_err(|e| ConfigError::HttpClient(e.to_string()))
}

/// Returns the response unchanged on 2xx, otherwise [`RemoteError::Api`] with the body text.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, RemoteError> {
    if !resp.status().is_success() {
        return Err(RemoteError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Decode a JSON body, reporting decode failures as [`RemoteError::Parse`].
pub async fn json_body<T: serde::de::DeserializeOwned>(resp: reqwest::Response) -> Result<T, RemoteError> {
    let bytes = resp.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| RemoteError::Parse(e.to_string()))
}

#[cfg(test)]
pub(crate) fn mock_response(status: u16, body: &str) -> reqwest::Response {
    reqwest::Response::from(
        ::http::Response::builder()
            .status(status)
            .body(body.to_string())
            .unwrap(),
    )
}
