//! Intake and content routes, mounted under `/api`.

use crate::handlers::{company, contact, diary, school};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/contact", post(contact::submit))
        .route(
            "/company-registration",
            post(company::register).get(company::list),
        )
        .route("/school-registration", post(school::register))
        .route("/schools", get(school::list))
        .route("/schools/:id", get(school::read))
        .route("/diary", get(diary::list))
        .route("/diary/:slug", get(diary::read))
        .with_state(state)
}
