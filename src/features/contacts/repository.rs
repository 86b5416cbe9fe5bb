//! Persistence for contact requests

use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::contacts::models::{
    ContactRequest, ContactRequestWithFreelancer, ContactStatus, NewContactRequest,
};

#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Insert a new request in the pending state
    async fn insert(&self, request: NewContactRequest) -> Result<ContactRequest>;

    /// Newest first, with the total count
    async fn list_recent(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<ContactRequestWithFreelancer>, i64)>;
}

pub struct PgContactRepository {
    pool: PgPool,
}

impl PgContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactRepository for PgContactRepository {
    async fn insert(&self, r: NewContactRequest) -> Result<ContactRequest> {
        sqlx::query_as::<_, ContactRequest>(
            r#"
            INSERT INTO contact_requests (
                freelancer_id, contractor_name, email, phone, work_address,
                daily_rate, project_description, status
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(r.freelancer_id)
        .bind(&r.contractor_name)
        .bind(&r.email)
        .bind(&r.phone)
        .bind(&r.work_address)
        .bind(r.daily_rate)
        .bind(&r.project_description)
        .bind(ContactStatus::Pending.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert contact request: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn list_recent(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<ContactRequestWithFreelancer>, i64)> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contact_requests")
            .fetch_one(&self.pool)
            .await?;

        let items = sqlx::query_as::<_, ContactRequestWithFreelancer>(
            r#"
            SELECT c.*, f.full_name AS freelancer_name
            FROM contact_requests c
            JOIN freelancers f ON f.id = c.freelancer_id
            ORDER BY c.created_at DESC
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok((items, total))
    }
}
