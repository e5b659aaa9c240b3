//! Extract a JSON object submission, rejecting with the `{error}` envelope.

use crate::error::AppError;
use crate::service::body_to_map;
use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde_json::{Map, Value};

/// Submitted form as a JSON object. Field values keep whatever JSON type the
/// client sent; handlers read them with `text_field` / `optional_text_field`.
#[derive(Clone, Debug)]
pub struct FormBody(pub Map<String, Value>);

#[async_trait]
impl<S> FromRequest<S> for FormBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state).await.map_err(|rejection| {
            tracing::warn!(error = %rejection.body_text(), "submission rejected: unreadable body");
            AppError::BadRequest(rejection.body_text())
        })?;
        Ok(FormBody(body_to_map(value)?))
    }
}
