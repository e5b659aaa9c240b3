//! Router assembly.

pub mod api;
pub mod common;

pub use api::api_routes;
pub use common::common_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Full application: common routes at the root, intake and content under `/api`.
pub fn app(state: AppState, body_limit_bytes: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .nest("/api", api_routes(state))
        .layer(RequestBodyLimitLayer::new(body_limit_bytes))
        .layer(TraceLayer::new_for_http())
}
