use axum::{
    extract::{multipart::Field, Multipart, Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::freelancers::dtos::{
    FreelancerResponseDto, ListFreelancersQuery, PhotoUpload, RegisterFreelancerDto,
    RegistrationForm, RegistrationResponseDto,
};
use crate::features::freelancers::filter::FreelancerFilter;
use crate::features::freelancers::services::{ListingService, RegistrationService};
use crate::shared::types::{ApiResponse, Meta};

/// List approved freelancers
///
/// Every query parameter is optional; empty values are ignored.
#[utoipa::path(
    get,
    path = "/api/freelancers",
    tag = "freelancers",
    params(ListFreelancersQuery),
    responses(
        (status = 200, description = "Approved freelancers in registration order", body = ApiResponse<Vec<FreelancerResponseDto>>)
    )
)]
pub async fn list_freelancers(
    State(service): State<Arc<ListingService>>,
    Query(query): Query<ListFreelancersQuery>,
) -> Result<Json<ApiResponse<Vec<FreelancerResponseDto>>>> {
    let filter = FreelancerFilter::from(query);
    let freelancers = service.list(&filter).await?;
    let total = freelancers.len() as i64;

    let items = freelancers
        .into_iter()
        .map(FreelancerResponseDto::from)
        .collect();

    Ok(Json(ApiResponse::success(
        Some(items),
        None,
        Some(Meta { total }),
    )))
}

/// Get an approved freelancer by ID
#[utoipa::path(
    get,
    path = "/api/freelancers/{id}",
    tag = "freelancers",
    params(
        ("id" = Uuid, Path, description = "Freelancer ID")
    ),
    responses(
        (status = 200, description = "Freelancer profile", body = ApiResponse<FreelancerResponseDto>),
        (status = 404, description = "Freelancer not found or not approved")
    )
)]
pub async fn get_freelancer(
    State(service): State<Arc<ListingService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<FreelancerResponseDto>>> {
    let freelancer = service.get_approved(id).await?;

    Ok(Json(ApiResponse::success(
        Some(freelancer.into()),
        None,
        None,
    )))
}

/// Register as a freelancer
///
/// Accepts multipart/form-data with the profile fields and an optional
/// `photo` file. The profile stays hidden until an administrator approves it.
#[utoipa::path(
    post,
    path = "/api/freelancers/register",
    tag = "freelancers",
    request_body(
        content = RegisterFreelancerDto,
        content_type = "multipart/form-data",
        description = "Registration form with an optional profile photo",
    ),
    responses(
        (status = 201, description = "Registration received", body = ApiResponse<RegistrationResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 413, description = "Request too large"),
        (status = 502, description = "Photo upload failed")
    )
)]
pub async fn register_freelancer(
    State(service): State<Arc<RegistrationService>>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<RegistrationResponseDto>>)> {
    let (form, photo) = read_registration(multipart).await?;

    let freelancer = service.register(form, photo).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(RegistrationResponseDto::new(freelancer)),
            Some("Registration received. Your profile will be visible after review.".to_string()),
            None,
        )),
    ))
}

/// Collect the multipart fields into a form and the optional photo
async fn read_registration(
    mut multipart: Multipart,
) -> Result<(RegistrationForm, Option<PhotoUpload>)> {
    let mut form = RegistrationForm::default();
    let mut photo: Option<PhotoUpload> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read multipart data: {}", e))
    })? {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "photo" => {
                let file_name = field.file_name().unwrap_or("").to_string();
                let content_type = field
                    .content_type()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());

                let data = field.bytes().await.map_err(|e| {
                    debug!("Failed to read photo bytes: {}", e);
                    AppError::BadRequest(format!("Failed to read photo data: {}", e))
                })?;

                // An empty file input still submits a part
                if file_name.is_empty() && data.is_empty() {
                    continue;
                }

                photo = Some(PhotoUpload {
                    file_name,
                    content_type,
                    data: data.to_vec(),
                });
            }
            "fullName" => form.full_name = read_text(field).await?,
            "email" => form.email = read_text(field).await?,
            "phone" => form.phone = read_text(field).await?,
            "age" => form.age = read_text(field).await?,
            "region" => form.region = read_text(field).await?,
            "experiences" => form.experiences = read_text(field).await?,
            "gender" => form.gender = optional(read_text(field).await?),
            "portfolio" => form.portfolio = optional(read_text(field).await?),
            "dailyRate" => form.daily_rate = optional(read_text(field).await?),
            "availability" => form.availability = optional(read_text(field).await?),
            "acceptTerms" => form.accept_terms = is_checked(&read_text(field).await?),
            _ => {
                debug!("Ignoring unknown field: {}", field_name);
            }
        }
    }

    Ok((form, photo))
}

async fn read_text(field: Field<'_>) -> Result<String> {
    let name = field.name().unwrap_or("").to_string();
    field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(format!("Failed to read {} field: {}", name, e)))
}

fn optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Checkbox semantics for the terms field
fn is_checked(value: &str) -> bool {
    let value = value.trim();
    value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("on") || value == "1"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::freelancers::routes::routes;
    use crate::shared::test_helpers::{
        sample_freelancer, InMemoryFreelancerRepository, RecordingObjectStore,
    };
    use axum_test::multipart::{MultipartForm, Part};
    use axum_test::TestServer;
    use serde_json::Value;

    struct Harness {
        server: TestServer,
        repo: Arc<InMemoryFreelancerRepository>,
        store: Arc<RecordingObjectStore>,
    }

    fn harness() -> Harness {
        let repo = Arc::new(InMemoryFreelancerRepository::default());
        let store = Arc::new(RecordingObjectStore::default());
        let registration = Arc::new(RegistrationService::new(repo.clone(), store.clone()));
        let listing = Arc::new(ListingService::new(repo.clone()));
        let server = TestServer::new(routes(registration, listing)).unwrap();
        Harness {
            server,
            repo,
            store,
        }
    }

    fn complete_form() -> MultipartForm {
        MultipartForm::new()
            .add_text("fullName", "Ana Silva")
            .add_text("email", "ana.silva@email.com")
            .add_text("phone", "(11) 99999-9999")
            .add_text("age", "28")
            .add_text("region", "São Paulo")
            .add_text("experiences", "Desenvolvimento Web, React")
            .add_text("gender", "")
            .add_text("dailyRate", "250.50")
            .add_text("acceptTerms", "on")
    }

    #[test]
    fn test_is_checked() {
        for value in ["true", "TRUE", "on", "1", " on "] {
            assert!(is_checked(value), "{}", value);
        }
        for value in ["", "false", "off", "0", "yes"] {
            assert!(!is_checked(value), "{}", value);
        }
    }

    #[tokio::test]
    async fn test_register_without_photo_returns_created() {
        let h = harness();

        let response = h
            .server
            .post("/api/freelancers/register")
            .multipart(complete_form())
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["redirectTo"], "/");
        assert_eq!(body["data"]["redirectAfterMs"], 2000);
        assert_eq!(body["data"]["freelancer"]["reviewState"], "pending");
        assert!(body["data"]["freelancer"]["photoUrl"].is_null());
        assert!(body["data"]["freelancer"]["gender"].is_null());
        assert_eq!(h.repo.insert_count(), 1);
        assert_eq!(h.store.upload_count(), 0);
    }

    #[tokio::test]
    async fn test_register_with_empty_photo_part_counts_as_no_photo() {
        let h = harness();
        let form = complete_form().add_part(
            "photo",
            Part::bytes(Vec::<u8>::new())
                .file_name("")
                .mime_type("application/octet-stream"),
        );

        let response = h.server.post("/api/freelancers/register").multipart(form).await;

        response.assert_status(StatusCode::CREATED);
        assert_eq!(h.store.upload_count(), 0);
    }

    #[tokio::test]
    async fn test_register_with_photo_uploads_it() {
        let h = harness();
        let form = complete_form().add_part(
            "photo",
            Part::bytes(vec![0x89, 0x50, 0x4e, 0x47])
                .file_name("Perfil.JPG")
                .mime_type("image/jpeg"),
        );

        let response = h.server.post("/api/freelancers/register").multipart(form).await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        let photo_url = body["data"]["freelancer"]["photoUrl"].as_str().unwrap();
        assert!(photo_url.ends_with(".jpg"));
        assert_eq!(h.store.upload_count(), 1);
    }

    #[tokio::test]
    async fn test_register_without_terms_is_rejected() {
        let h = harness();
        let form = MultipartForm::new()
            .add_text("fullName", "Ana Silva")
            .add_text("email", "ana.silva@email.com")
            .add_text("phone", "(11) 99999-9999")
            .add_text("age", "28")
            .add_text("region", "São Paulo")
            .add_text("experiences", "React");

        let response = h.server.post("/api/freelancers/register").multipart(form).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(h.repo.insert_count(), 0);
    }

    #[tokio::test]
    async fn test_list_filters_by_query() {
        let h = harness();
        let sp = sample_freelancer("São Paulo", "React");
        let recife = sample_freelancer("Recife", "Design");
        h.repo.seed(vec![sp.clone(), recife]);

        let response = h
            .server
            .get("/api/freelancers")
            .add_query_param("region", "São Paulo")
            .add_query_param("experience", "")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["meta"]["total"], 1);
        assert_eq!(body["data"][0]["id"], sp.id.to_string());
        assert_eq!(body["data"][0]["skills"][0], "React");
    }

    #[tokio::test]
    async fn test_get_unknown_freelancer_is_not_found() {
        let h = harness();

        let response = h
            .server
            .get(&format!("/api/freelancers/{}", Uuid::new_v4()))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
    }
}
