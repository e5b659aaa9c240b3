//! Company (sponsor) registration: durable write, upstream read.

use crate::error::AppError;
use crate::extractors::FormBody;
use crate::model::{next_company_id, skip_past_company_id, CompanyRegistration, COMPANY_REQUIRED_FIELDS};
use crate::response::{created, CompanyCreated, CompanySummary};
use crate::service::RequestValidator;
use crate::state::AppState;
use crate::store::StoreError;
use axum::{extract::State, Json};
use chrono::Utc;
use serde_json::Value;

/// Inserts tried before a duplicate id is reported as a store error.
const ID_ATTEMPTS: usize = 5;

/// POST /api/company-registration
pub async fn register(
    State(state): State<AppState>,
    FormBody(body): FormBody,
) -> Result<impl axum::response::IntoResponse, AppError> {
    RequestValidator::require(&body, COMPANY_REQUIRED_FIELDS)?;
    let now = Utc::now();
    let mut company = CompanyRegistration::from_submission(&body, next_company_id(now), now);
    let mut attempts = 1;
    loop {
        match state.companies.insert(&company).await {
            Ok(()) => break,
            Err(StoreError::Duplicate(taken)) if attempts < ID_ATTEMPTS => {
                tracing::warn!(id = %taken, "company id already stored, retrying");
                skip_past_company_id(&taken);
                company.id = next_company_id(Utc::now());
                attempts += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }
    tracing::info!(id = %company.id, company = %company.company_name, "company registered");
    Ok(created(CompanyCreated {
        message: "Company registered successfully",
        company: CompanySummary {
            id: company.id,
            company_name: company.company_name,
            email: company.email,
        },
    }))
}

/// GET /api/company-registration: upstream payload relayed as-is.
pub async fn list(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    match state.directory.fetch_all().await {
        Ok(payload) => Ok(Json(payload)),
        Err(e) => {
            tracing::error!(error = %e, "upstream companies request failed");
            Err(AppError::Upstream)
        }
    }
}
