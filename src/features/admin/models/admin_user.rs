use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for an administrator account
#[derive(Debug, Clone, FromRow)]
pub struct AdminUser {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Aggregate counters for the admin dashboard
#[derive(Debug, Clone, Default, PartialEq, Eq, FromRow)]
pub struct DashboardStats {
    pub total_freelancers: i64,
    pub approved_freelancers: i64,
    pub pending_approvals: i64,
    pub rejected_freelancers: i64,
    pub total_contact_requests: i64,
    pub contact_requests_last_30_days: i64,
}
