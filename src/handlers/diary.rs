//! Diary list and detail, read from the CMS at request time.

use crate::error::AppError;
use crate::remote::RemoteError;
use crate::response::{ok, DiaryList, DiaryOne};
use crate::state::AppState;
use axum::extract::{Path, State};

fn cms_error(e: RemoteError) -> AppError {
    tracing::error!(error = %e, "diary content request failed");
    AppError::Cms("Failed to fetch diary content".into())
}

/// GET /api/diary
pub async fn list(State(state): State<AppState>) -> Result<impl axum::response::IntoResponse, AppError> {
    let entries = state.cms.list_entries().await.map_err(cms_error)?;
    Ok(ok(DiaryList { entries }))
}

/// GET /api/diary/:slug
pub async fn read(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let entry = state
        .cms
        .entry_by_slug(&slug)
        .await
        .map_err(cms_error)?
        .ok_or_else(|| AppError::NotFound("Diary entry not found".into()))?;
    Ok(ok(DiaryOne { entry }))
}
