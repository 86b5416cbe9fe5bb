//! Persistence for freelancer profiles

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::freelancers::models::{Freelancer, NewFreelancer};

#[async_trait]
pub trait FreelancerRepository: Send + Sync {
    /// Insert a new, unapproved profile
    async fn insert(&self, freelancer: NewFreelancer) -> Result<Freelancer>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Freelancer>>;

    /// Approved profiles in insertion order
    async fn list_approved(&self) -> Result<Vec<Freelancer>>;

    /// Profiles never reviewed, oldest first, with the total count
    async fn list_pending(&self, offset: i64, limit: i64) -> Result<(Vec<Freelancer>, i64)>;

    /// Record an admin decision; `None` when the id is unknown
    async fn set_review(&self, id: Uuid, approved: bool) -> Result<Option<Freelancer>>;
}

pub struct PgFreelancerRepository {
    pool: PgPool,
}

impl PgFreelancerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FreelancerRepository for PgFreelancerRepository {
    async fn insert(&self, f: NewFreelancer) -> Result<Freelancer> {
        sqlx::query_as::<_, Freelancer>(
            r#"
            INSERT INTO freelancers (
                full_name, email, phone, age, gender, region, experiences,
                portfolio_url, daily_rate, availability, photo_url, approved
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, FALSE)
            RETURNING *
            "#,
        )
        .bind(&f.full_name)
        .bind(&f.email)
        .bind(&f.phone)
        .bind(f.age)
        .bind(f.gender.map(|g| g.as_str()))
        .bind(f.region.as_str())
        .bind(&f.experiences)
        .bind(&f.portfolio_url)
        .bind(f.daily_rate)
        .bind(f.availability.map(|a| a.as_str()))
        .bind(&f.photo_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert freelancer: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Freelancer>> {
        let freelancer =
            sqlx::query_as::<_, Freelancer>("SELECT * FROM freelancers WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(freelancer)
    }

    async fn list_approved(&self) -> Result<Vec<Freelancer>> {
        let freelancers = sqlx::query_as::<_, Freelancer>(
            r#"
            SELECT * FROM freelancers
            WHERE approved = TRUE
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list approved freelancers: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(freelancers)
    }

    async fn list_pending(&self, offset: i64, limit: i64) -> Result<(Vec<Freelancer>, i64)> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM freelancers WHERE approved = FALSE AND reviewed_at IS NULL",
        )
        .fetch_one(&self.pool)
        .await?;

        let items = sqlx::query_as::<_, Freelancer>(
            r#"
            SELECT * FROM freelancers
            WHERE approved = FALSE AND reviewed_at IS NULL
            ORDER BY created_at ASC
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok((items, total))
    }

    async fn set_review(&self, id: Uuid, approved: bool) -> Result<Option<Freelancer>> {
        let freelancer = sqlx::query_as::<_, Freelancer>(
            r#"
            UPDATE freelancers
            SET approved = $2, reviewed_at = NOW(), updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(approved)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to review freelancer {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        Ok(freelancer)
    }
}
