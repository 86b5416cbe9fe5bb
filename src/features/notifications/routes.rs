use axum::{routing::post, Router};
use std::sync::Arc;

use crate::features::notifications::handlers::{
    send_contact_email, send_contact_email_preflight,
};
use crate::features::notifications::services::ContactEmailService;

/// Routes for the email function
///
/// Note: Merge these outside the global CORS layer; the handlers set their own
/// CORS headers and must answer preflight themselves.
pub fn function_routes(service: Arc<ContactEmailService>) -> Router {
    Router::new()
        .route(
            "/functions/v1/send-contact-email",
            post(send_contact_email).options(send_contact_email_preflight),
        )
        .with_state(service)
}
