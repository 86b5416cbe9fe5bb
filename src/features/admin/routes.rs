use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::core::middleware::admin_gate_middleware;
use crate::features::admin::handlers;
use crate::features::admin::services::{AdminAuthService, AdminService};
use crate::features::admin::session::SessionTokenService;

/// Create admin routes, to be nested under `/api/admin`
///
/// Everything except `/login` sits behind the admin gate.
pub fn routes(
    admin_service: Arc<AdminService>,
    auth_service: Arc<AdminAuthService>,
    tokens: Arc<SessionTokenService>,
) -> Router {
    let gated = Router::new()
        .route("/dashboard", get(handlers::dashboard))
        .route("/freelancers/pending", get(handlers::list_pending_freelancers))
        .route("/freelancers/{id}/approve", post(handlers::approve_freelancer))
        .route("/freelancers/{id}/reject", post(handlers::reject_freelancer))
        .route("/contact-requests", get(handlers::list_contact_requests))
        .route_layer(middleware::from_fn_with_state(tokens, admin_gate_middleware))
        .with_state(admin_service);

    Router::new()
        .route("/login", post(handlers::login))
        .with_state(auth_service)
        .merge(gated)
}
