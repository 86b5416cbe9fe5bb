//! Persistence for admin accounts and dashboard aggregates

use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::admin::models::{AdminUser, DashboardStats};

#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<AdminUser>>;

    async fn create(&self, username: &str, password_hash: &str) -> Result<AdminUser>;

    async fn dashboard_stats(&self) -> Result<DashboardStats>;
}

pub struct PgAdminRepository {
    pool: PgPool,
}

impl PgAdminRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdminRepository for PgAdminRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<AdminUser>> {
        let admin = sqlx::query_as::<_, AdminUser>(
            "SELECT id, username, password_hash, created_at FROM admin_users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(admin)
    }

    async fn create(&self, username: &str, password_hash: &str) -> Result<AdminUser> {
        sqlx::query_as::<_, AdminUser>(
            r#"
            INSERT INTO admin_users (username, password_hash)
            VALUES ($1, $2)
            RETURNING id, username, password_hash, created_at
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create admin user: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn dashboard_stats(&self) -> Result<DashboardStats> {
        let stats = sqlx::query_as::<_, DashboardStats>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM freelancers) AS total_freelancers,
                (SELECT COUNT(*) FROM freelancers WHERE approved = TRUE) AS approved_freelancers,
                (SELECT COUNT(*) FROM freelancers
                    WHERE approved = FALSE AND reviewed_at IS NULL) AS pending_approvals,
                (SELECT COUNT(*) FROM freelancers
                    WHERE approved = FALSE AND reviewed_at IS NOT NULL) AS rejected_freelancers,
                (SELECT COUNT(*) FROM contact_requests) AS total_contact_requests,
                (SELECT COUNT(*) FROM contact_requests
                    WHERE created_at >= NOW() - INTERVAL '30 days') AS contact_requests_last_30_days
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to compute dashboard stats: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(stats)
    }
}
