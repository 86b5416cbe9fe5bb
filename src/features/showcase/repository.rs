use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::Result;
use crate::features::showcase::models::{JobListing, Sponsor};

/// Read-only access to the sidebar listings
#[async_trait]
pub trait ShowcaseRepository: Send + Sync {
    async fn list_sponsors(&self) -> Result<Vec<Sponsor>>;

    async fn list_jobs(&self) -> Result<Vec<JobListing>>;
}

pub struct PgShowcaseRepository {
    pool: PgPool,
}

impl PgShowcaseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShowcaseRepository for PgShowcaseRepository {
    async fn list_sponsors(&self) -> Result<Vec<Sponsor>> {
        let sponsors = sqlx::query_as::<_, Sponsor>(
            "SELECT id, name, logo, description, display_order FROM sponsors ORDER BY display_order ASC, name ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(sponsors)
    }

    async fn list_jobs(&self) -> Result<Vec<JobListing>> {
        let jobs = sqlx::query_as::<_, JobListing>(
            "SELECT id, title, location, budget, display_order FROM job_listings ORDER BY display_order ASC, title ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(jobs)
    }
}
