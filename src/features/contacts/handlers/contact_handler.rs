//! Contact request handler

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::contacts::dtos::{ContactRequestResponseDto, CreateContactRequestDto};
use crate::features::contacts::services::ContactService;
use crate::shared::types::ApiResponse;

/// Contact a freelancer
///
/// Stores the request and then tries to email the freelancer. The response
/// reflects the stored request only; email delivery is not reported.
#[utoipa::path(
    post,
    path = "/api/contact-requests",
    request_body = CreateContactRequestDto,
    responses(
        (status = 201, description = "Contact request stored", body = ApiResponse<ContactRequestResponseDto>),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Freelancer not found")
    ),
    tag = "contacts"
)]
pub async fn create_contact_request(
    State(service): State<Arc<ContactService>>,
    AppJson(dto): AppJson<CreateContactRequestDto>,
) -> Result<(StatusCode, Json<ApiResponse<ContactRequestResponseDto>>)> {
    let request = service.submit(dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(request.into()),
            Some("Contact request sent".to_string()),
            None,
        )),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::contacts::routes::routes;
    use crate::shared::test_helpers::{
        sample_freelancer, InMemoryContactRepository, InMemoryFreelancerRepository,
        RecordingDispatcher,
    };
    use axum_test::TestServer;
    use serde_json::{json, Value};
    use uuid::Uuid;

    fn server(dispatcher: RecordingDispatcher) -> (TestServer, Uuid, Arc<InMemoryContactRepository>) {
        let freelancers = Arc::new(InMemoryFreelancerRepository::default());
        let freelancer = sample_freelancer("Fortaleza", "Pintura");
        let id = freelancer.id;
        freelancers.seed(vec![freelancer]);
        let contacts = Arc::new(InMemoryContactRepository::default());
        let service = Arc::new(ContactService::new(
            contacts.clone(),
            freelancers,
            Arc::new(dispatcher),
        ));
        (TestServer::new(routes(service)).unwrap(), id, contacts)
    }

    #[tokio::test]
    async fn test_create_returns_created_even_when_notification_fails() {
        let (server, id, contacts) = server(RecordingDispatcher::failing());

        let response = server
            .post("/api/contact-requests")
            .json(&json!({
                "freelancerId": id,
                "contractorName": "Marina Lopes",
                "phone": "(85) 97777-6666",
                "email": "marina@obra.com",
                "workAddress": "Rua das Flores, 50",
                "dailyRate": "250.50"
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["status"], "pending");
        assert_eq!(body["data"]["dailyRate"], "250.50");
        assert_eq!(contacts.all().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_rate_is_bad_request() {
        let (server, id, contacts) = server(RecordingDispatcher::default());

        let response = server
            .post("/api/contact-requests")
            .json(&json!({
                "freelancerId": id,
                "contractorName": "Marina Lopes",
                "phone": "(85) 97777-6666",
                "email": "marina@obra.com",
                "workAddress": "Rua das Flores, 50"
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(contacts.all().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_freelancer_is_not_found() {
        let (server, _, contacts) = server(RecordingDispatcher::default());

        let response = server
            .post("/api/contact-requests")
            .json(&json!({
                "freelancerId": Uuid::new_v4(),
                "contractorName": "Marina Lopes",
                "phone": "(85) 97777-6666",
                "email": "marina@obra.com",
                "workAddress": "Rua das Flores, 50",
                "dailyRate": 300
            }))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert!(contacts.all().is_empty());
    }
}
