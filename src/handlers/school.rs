//! School registration intake and the public school listing.

use crate::error::AppError;
use crate::extractors::FormBody;
use crate::model::{NewSchool, School, SchoolFilter, SCHOOL_REQUIRED_FIELDS};
use crate::response::{created, ok, SchoolCreated, SchoolList, SchoolOne};
use crate::service::RequestValidator;
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

/// POST /api/school-registration
pub async fn register(
    State(state): State<AppState>,
    FormBody(body): FormBody,
) -> Result<impl axum::response::IntoResponse, AppError> {
    RequestValidator::require(&body, SCHOOL_REQUIRED_FIELDS)?;
    let row = state.schools.insert(NewSchool::from_submission(&body)).await?;
    tracing::info!(id = %row.id, school = %row.school_name, "school registered");
    Ok(created(SchoolCreated {
        message: "School registered successfully",
        data: vec![row],
    }))
}

/// GET /api/schools?location=&need=&level=
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<SchoolFilter>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let rows = state.schools.list(&filter).await?;
    tracing::debug!(count = rows.len(), filter = ?filter, "schools listed");
    Ok(ok(SchoolList {
        schools: rows.into_iter().map(School::from).collect(),
    }))
}

/// GET /api/schools/:id
pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let id = Uuid::parse_str(&id_str).map_err(|_| AppError::BadRequest("invalid school id".into()))?;
    let row = state
        .schools
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound("School not found".into()))?;
    Ok(ok(SchoolOne { school: row.into() }))
}
