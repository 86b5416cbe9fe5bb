use std::sync::Arc;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::admin::dtos::DashboardStatsDto;
use crate::features::admin::repository::AdminRepository;
use crate::features::contacts::dtos::ContactRequestOverviewDto;
use crate::features::contacts::repository::ContactRepository;
use crate::features::freelancers::dtos::FreelancerResponseDto;
use crate::features::freelancers::repository::FreelancerRepository;

/// Service for admin queries and review decisions
pub struct AdminService {
    admins: Arc<dyn AdminRepository>,
    freelancers: Arc<dyn FreelancerRepository>,
    contacts: Arc<dyn ContactRepository>,
}

impl AdminService {
    pub fn new(
        admins: Arc<dyn AdminRepository>,
        freelancers: Arc<dyn FreelancerRepository>,
        contacts: Arc<dyn ContactRepository>,
    ) -> Self {
        Self {
            admins,
            freelancers,
            contacts,
        }
    }

    // =========================================================================
    // DASHBOARD
    // =========================================================================

    pub async fn dashboard(&self) -> Result<DashboardStatsDto> {
        Ok(self.admins.dashboard_stats().await?.into())
    }

    // =========================================================================
    // FREELANCER REVIEW
    // =========================================================================

    /// Profiles awaiting a first decision, oldest first
    pub async fn list_pending(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<FreelancerResponseDto>, i64)> {
        let (items, total) = self.freelancers.list_pending(offset, limit).await?;
        Ok((items.into_iter().map(Into::into).collect(), total))
    }

    pub async fn approve(&self, id: Uuid, reviewer: &str) -> Result<FreelancerResponseDto> {
        self.review(id, true, reviewer).await
    }

    pub async fn reject(&self, id: Uuid, reviewer: &str) -> Result<FreelancerResponseDto> {
        self.review(id, false, reviewer).await
    }

    /// The latest decision wins; re-reviewing is allowed
    async fn review(&self, id: Uuid, approved: bool, reviewer: &str) -> Result<FreelancerResponseDto> {
        let freelancer = self
            .freelancers
            .set_review(id, approved)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Freelancer {} not found", id)))?;

        tracing::info!(
            "Freelancer {} {} by {}",
            freelancer.id,
            if approved { "approved" } else { "rejected" },
            reviewer
        );

        Ok(freelancer.into())
    }

    // =========================================================================
    // CONTACT REQUESTS
    // =========================================================================

    /// Newest first, with the target freelancer's name
    pub async fn list_contact_requests(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<ContactRequestOverviewDto>, i64)> {
        let (items, total) = self.contacts.list_recent(offset, limit).await?;
        Ok((items.into_iter().map(Into::into).collect(), total))
    }
}
