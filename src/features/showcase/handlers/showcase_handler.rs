use axum::{extract::State, Json};
use std::sync::Arc;

use crate::core::error::Result;
use crate::features::showcase::dtos::{JobListingResponseDto, SponsorResponseDto};
use crate::features::showcase::services::ShowcaseService;
use crate::shared::types::{ApiResponse, Meta};

/// List sponsors
#[utoipa::path(
    get,
    path = "/api/sponsors",
    tag = "showcase",
    responses(
        (status = 200, description = "Sponsors in display order", body = ApiResponse<Vec<SponsorResponseDto>>)
    )
)]
pub async fn list_sponsors(
    State(service): State<Arc<ShowcaseService>>,
) -> Result<Json<ApiResponse<Vec<SponsorResponseDto>>>> {
    let sponsors = service.sponsors().await?;
    let total = sponsors.len() as i64;

    Ok(Json(ApiResponse::success(
        Some(sponsors),
        None,
        Some(Meta { total }),
    )))
}

/// List job openings
#[utoipa::path(
    get,
    path = "/api/jobs",
    tag = "showcase",
    responses(
        (status = 200, description = "Job listings in display order", body = ApiResponse<Vec<JobListingResponseDto>>)
    )
)]
pub async fn list_jobs(
    State(service): State<Arc<ShowcaseService>>,
) -> Result<Json<ApiResponse<Vec<JobListingResponseDto>>>> {
    let jobs = service.jobs().await?;
    let total = jobs.len() as i64;

    Ok(Json(ApiResponse::success(Some(jobs), None, Some(Meta { total }))))
}
