use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::features::freelancers::handlers::{
    get_freelancer, list_freelancers, register_freelancer,
};
use crate::features::freelancers::services::{ListingService, RegistrationService};
use crate::shared::constants::MAX_PHOTO_SIZE;

/// Create routes for the freelancers feature
///
/// Note: All endpoints are public. Unapproved profiles never leave the read side.
pub fn routes(registration: Arc<RegistrationService>, listing: Arc<ListingService>) -> Router {
    let read = Router::new()
        .route("/api/freelancers", get(list_freelancers))
        .route("/api/freelancers/{id}", get(get_freelancer))
        .with_state(listing);

    let write = Router::new()
        .route(
            "/api/freelancers/register",
            // Photo limit plus room for the text fields and multipart framing
            post(register_freelancer).layer(DefaultBodyLimit::max(MAX_PHOTO_SIZE + 1024 * 1024)),
        )
        .with_state(registration);

    read.merge(write)
}
