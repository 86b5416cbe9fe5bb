//! Contact request routes

use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::contacts::handlers;
use crate::features::contacts::services::ContactService;

/// Create routes for the contacts feature
///
/// Note: This feature is public (no authentication required) as it backs the
/// contractor contact form.
pub fn routes(service: Arc<ContactService>) -> Router {
    Router::new()
        .route(
            "/api/contact-requests",
            post(handlers::create_contact_request),
        )
        .with_state(service)
}
