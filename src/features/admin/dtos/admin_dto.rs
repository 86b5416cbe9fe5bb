use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::admin::models::{AdminSession, DashboardStats};
use crate::shared::validation::validate_not_blank;

// =============================================================================
// LOGIN
// =============================================================================

#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
pub struct LoginDto {
    #[validate(custom(function = "validate_not_blank", message = "username is required"))]
    #[schema(example = "admin")]
    pub username: String,

    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminProfileDto {
    pub id: Uuid,
    pub username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponseDto {
    /// Send as `Authorization: Bearer <token>` on admin requests
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub admin: AdminProfileDto,
}

impl LoginResponseDto {
    pub fn new(token: String, session: AdminSession) -> Self {
        Self {
            token,
            expires_at: session.expires_at,
            admin: AdminProfileDto {
                id: session.admin_id,
                username: session.username,
            },
        }
    }
}

// =============================================================================
// DASHBOARD
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatsDto {
    pub total_freelancers: i64,
    pub approved_freelancers: i64,
    pub pending_approvals: i64,
    pub rejected_freelancers: i64,
    pub total_contact_requests: i64,
    pub contact_requests_last_30_days: i64,
}

impl From<DashboardStats> for DashboardStatsDto {
    fn from(s: DashboardStats) -> Self {
        Self {
            total_freelancers: s.total_freelancers,
            approved_freelancers: s.approved_freelancers,
            pending_approvals: s.pending_approvals,
            rejected_freelancers: s.rejected_freelancers,
            total_contact_requests: s.total_contact_requests,
            contact_requests_last_30_days: s.contact_requests_last_30_days,
        }
    }
}
