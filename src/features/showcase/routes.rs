use axum::{routing::get, Router};
use std::sync::Arc;

use crate::features::showcase::handlers::{list_jobs, list_sponsors};
use crate::features::showcase::services::ShowcaseService;

/// Create routes for the sidebar listings (public, read-only)
pub fn routes(service: Arc<ShowcaseService>) -> Router {
    Router::new()
        .route("/api/sponsors", get(list_sponsors))
        .route("/api/jobs", get(list_jobs))
        .with_state(service)
}
