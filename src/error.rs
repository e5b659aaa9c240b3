//! Typed errors and HTTP mapping.

use crate::mail::MailFailure;
use crate::store::StoreError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("configuration: {0}")]
    Figment(#[from] figment::Error),
    #[error("{key}: invalid email address '{value}'")]
    Address { key: &'static str, value: String },
    #[error("smtp transport: {0}")]
    Smtp(String),
    #[error("http client: {0}")]
    HttpClient(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Store(String),
    #[error("Failed to fetch companies")]
    Upstream,
    #[error("{0}")]
    Cms(String),
    #[error("{0}")]
    Mail(MailFailure),
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        tracing::error!(error = %e, "store operation failed");
        AppError::Store(e.to_string())
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Contact relay failures keep the `success` flag the form expects.
#[derive(Serialize)]
pub struct FailureBody {
    pub success: bool,
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::MissingField(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Store(_) | AppError::Upstream | AppError::Mail(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Cms(_) => StatusCode::BAD_GATEWAY,
        };
        if let AppError::Mail(_) = self {
            let body = FailureBody {
                success: false,
                error: self.to_string(),
            };
            return (status, Json(body)).into_response();
        }
        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}
