use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::admin::dtos::{DashboardStatsDto, LoginDto, LoginResponseDto};
use crate::features::admin::models::AdminSession;
use crate::features::admin::services::{AdminAuthService, AdminService};
use crate::features::contacts::dtos::ContactRequestOverviewDto;
use crate::features::freelancers::dtos::FreelancerResponseDto;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// Log in as an administrator
#[utoipa::path(
    post,
    path = "/api/admin/login",
    request_body = LoginDto,
    responses(
        (status = 200, description = "Session issued", body = ApiResponse<LoginResponseDto>),
        (status = 400, description = "Missing username or password"),
        (status = 401, description = "Invalid username or password")
    ),
    tag = "admin"
)]
pub async fn login(
    State(service): State<Arc<AdminAuthService>>,
    AppJson(dto): AppJson<LoginDto>,
) -> Result<Json<ApiResponse<LoginResponseDto>>> {
    let response = service.login(dto).await?;

    Ok(Json(ApiResponse::success(Some(response), None, None)))
}

/// Dashboard counters
#[utoipa::path(
    get,
    path = "/api/admin/dashboard",
    responses(
        (status = 200, description = "Aggregate statistics", body = ApiResponse<DashboardStatsDto>),
        (status = 401, description = "Admin session required; Location points at the login page")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn dashboard(
    _session: AdminSession,
    State(service): State<Arc<AdminService>>,
) -> Result<Json<ApiResponse<DashboardStatsDto>>> {
    let stats = service.dashboard().await?;

    Ok(Json(ApiResponse::success(Some(stats), None, None)))
}

/// List freelancers awaiting review (paginated)
#[utoipa::path(
    get,
    path = "/api/admin/freelancers/pending",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Pending freelancers, oldest first", body = ApiResponse<Vec<FreelancerResponseDto>>),
        (status = 401, description = "Admin session required")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_pending_freelancers(
    _session: AdminSession,
    State(service): State<Arc<AdminService>>,
    Query(params): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<FreelancerResponseDto>>>> {
    let (items, total) = service.list_pending(params.offset(), params.limit()).await?;

    Ok(Json(ApiResponse::success(
        Some(items),
        None,
        Some(Meta { total }),
    )))
}

/// Approve a freelancer
#[utoipa::path(
    post,
    path = "/api/admin/freelancers/{id}/approve",
    params(
        ("id" = Uuid, Path, description = "Freelancer ID")
    ),
    responses(
        (status = 200, description = "Freelancer approved", body = ApiResponse<FreelancerResponseDto>),
        (status = 401, description = "Admin session required"),
        (status = 404, description = "Freelancer not found")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn approve_freelancer(
    session: AdminSession,
    State(service): State<Arc<AdminService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<FreelancerResponseDto>>> {
    let freelancer = service.approve(id, &session.username).await?;

    Ok(Json(ApiResponse::success(
        Some(freelancer),
        Some("Freelancer approved".to_string()),
        None,
    )))
}

/// Reject a freelancer
#[utoipa::path(
    post,
    path = "/api/admin/freelancers/{id}/reject",
    params(
        ("id" = Uuid, Path, description = "Freelancer ID")
    ),
    responses(
        (status = 200, description = "Freelancer rejected", body = ApiResponse<FreelancerResponseDto>),
        (status = 401, description = "Admin session required"),
        (status = 404, description = "Freelancer not found")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn reject_freelancer(
    session: AdminSession,
    State(service): State<Arc<AdminService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<FreelancerResponseDto>>> {
    let freelancer = service.reject(id, &session.username).await?;

    Ok(Json(ApiResponse::success(
        Some(freelancer),
        Some("Freelancer rejected".to_string()),
        None,
    )))
}

/// List contact requests (paginated)
#[utoipa::path(
    get,
    path = "/api/admin/contact-requests",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Contact requests, newest first", body = ApiResponse<Vec<ContactRequestOverviewDto>>),
        (status = 401, description = "Admin session required")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_contact_requests(
    _session: AdminSession,
    State(service): State<Arc<AdminService>>,
    Query(params): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<ContactRequestOverviewDto>>>> {
    let (items, total) = service
        .list_contact_requests(params.offset(), params.limit())
        .await?;

    Ok(Json(ApiResponse::success(
        Some(items),
        None,
        Some(Meta { total }),
    )))
}

#[cfg(test)]
mod tests {
    use crate::features::admin::routes::routes;
    use crate::features::admin::services::{AdminAuthService, AdminService};
    use crate::features::admin::session::SessionTokenService;
    use crate::shared::test_helpers::{
        admin_auth_config, sample_freelancer, InMemoryAdminRepository,
        InMemoryContactRepository, InMemoryFreelancerRepository,
    };
    use axum::http::StatusCode;
    use axum::Router;
    use axum_test::TestServer;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use uuid::Uuid;

    struct Harness {
        server: TestServer,
        freelancers: Arc<InMemoryFreelancerRepository>,
    }

    async fn harness() -> Harness {
        let tokens = Arc::new(SessionTokenService::new(&admin_auth_config()));
        let admins = Arc::new(InMemoryAdminRepository::default());
        let freelancers = Arc::new(InMemoryFreelancerRepository::default());
        let auth = Arc::new(AdminAuthService::new(admins.clone(), tokens.clone()));
        auth.ensure_admin("admin", "s3nha").await.unwrap();
        let admin = Arc::new(AdminService::new(
            admins,
            freelancers.clone(),
            Arc::new(InMemoryContactRepository::default()),
        ));

        let app = Router::new().nest("/api/admin", routes(admin, auth, tokens));
        Harness {
            server: TestServer::new(app).unwrap(),
            freelancers,
        }
    }

    async fn token(server: &TestServer) -> String {
        let response = server
            .post("/api/admin/login")
            .json(&json!({ "username": "admin", "password": "s3nha" }))
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        body["data"]["token"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_gate_redirects_without_token() {
        let h = harness().await;

        let response = h.server.get("/api/admin/dashboard").await;

        response.assert_status(StatusCode::UNAUTHORIZED);
        assert_eq!(response.header("location"), "/admin/login");
        let body: Value = response.json();
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_gate_redirects_with_malformed_token() {
        let h = harness().await;

        let response = h
            .server
            .get("/api/admin/freelancers/pending")
            .add_header("Authorization", "Bearer not-a-token")
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
        assert_eq!(response.header("location"), "/admin/login");
    }

    #[tokio::test]
    async fn test_login_with_wrong_password_is_unauthorized() {
        let h = harness().await;

        let response = h
            .server
            .post("/api/admin/login")
            .json(&json!({ "username": "admin", "password": "wrong" }))
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_review_flow_with_session() {
        let h = harness().await;
        let mut pending = sample_freelancer("Goiânia", "Marcenaria");
        pending.approved = false;
        h.freelancers.seed(vec![pending.clone()]);
        let bearer = format!("Bearer {}", token(&h.server).await);

        let listed = h
            .server
            .get("/api/admin/freelancers/pending")
            .add_query_param("page", 1)
            .add_query_param("pageSize", 5)
            .add_header("Authorization", bearer.clone())
            .await;
        listed.assert_status_ok();
        let body: Value = listed.json();
        assert_eq!(body["meta"]["total"], 1);
        assert_eq!(body["data"][0]["id"], pending.id.to_string());

        let approved = h
            .server
            .post(&format!("/api/admin/freelancers/{}/approve", pending.id))
            .add_header("Authorization", bearer.clone())
            .await;
        approved.assert_status_ok();
        let body: Value = approved.json();
        assert_eq!(body["data"]["reviewState"], "approved");

        let missing = h
            .server
            .post(&format!("/api/admin/freelancers/{}/reject", Uuid::new_v4()))
            .add_header("Authorization", bearer)
            .await;
        missing.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_dashboard_and_contacts_with_session() {
        let h = harness().await;
        let bearer = format!("Bearer {}", token(&h.server).await);

        let dashboard = h
            .server
            .get("/api/admin/dashboard")
            .add_header("Authorization", bearer.clone())
            .await;
        dashboard.assert_status_ok();
        let body: Value = dashboard.json();
        assert!(body["data"]["contactRequestsLast30Days"].is_number());

        let contacts = h
            .server
            .get("/api/admin/contact-requests")
            .add_header("Authorization", bearer)
            .await;
        contacts.assert_status_ok();
        let body: Value = contacts.json();
        assert_eq!(body["meta"]["total"], 0);
    }
}
