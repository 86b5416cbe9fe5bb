//! Serverless-style email function.
//!
//! Answers outside the `ApiResponse` envelope: the provider JSON on success,
//! `{ "error": ... }` with 500 on any failure. Every response carries the
//! permissive CORS headers so browsers can call it directly.

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use tracing::warn;

use crate::features::notifications::models::ContactNotification;
use crate::features::notifications::services::ContactEmailService;

const ALLOW_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

fn cors_headers() -> [(HeaderName, HeaderValue); 2] {
    [
        (
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ),
        (
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOW_HEADERS),
        ),
    ]
}

/// CORS preflight
pub async fn send_contact_email_preflight() -> Response {
    (StatusCode::OK, cors_headers()).into_response()
}

/// Email a freelancer about a new contact request
#[utoipa::path(
    post,
    path = "/functions/v1/send-contact-email",
    tag = "functions",
    request_body = ContactNotification,
    responses(
        (status = 200, description = "Mail provider response", body = serde_json::Value),
        (status = 500, description = "Body, rendering or provider failure", body = serde_json::Value)
    )
)]
pub async fn send_contact_email(
    State(service): State<Arc<ContactEmailService>>,
    body: Bytes,
) -> Response {
    let result = match serde_json::from_slice::<ContactNotification>(&body) {
        Ok(notification) => service.send(&notification).await.map_err(|e| e.to_string()),
        Err(e) => Err(e.to_string()),
    };

    match result {
        Ok(provider_response) => {
            (StatusCode::OK, cors_headers(), Json(provider_response)).into_response()
        }
        Err(message) => {
            warn!("send-contact-email failed: {}", message);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                cors_headers(),
                Json(json!({ "error": message })),
            )
                .into_response()
        }
    }
}
