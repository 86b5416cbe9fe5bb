use std::sync::Arc;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::freelancers::filter::FreelancerFilter;
use crate::features::freelancers::models::Freelancer;
use crate::features::freelancers::repository::FreelancerRepository;

/// Read side of the public freelancer directory
pub struct ListingService {
    repository: Arc<dyn FreelancerRepository>,
}

impl ListingService {
    pub fn new(repository: Arc<dyn FreelancerRepository>) -> Self {
        Self { repository }
    }

    /// Approved profiles in insertion order, narrowed by `filter`
    pub async fn list(&self, filter: &FreelancerFilter) -> Result<Vec<Freelancer>> {
        let approved = self.repository.list_approved().await?;
        Ok(filter.apply(approved))
    }

    /// A single approved profile. Unapproved profiles are reported as missing.
    pub async fn get_approved(&self, id: Uuid) -> Result<Freelancer> {
        self.repository
            .find_by_id(id)
            .await?
            .filter(|f| f.approved)
            .ok_or_else(|| AppError::NotFound(format!("Freelancer {} not found", id)))
    }
}
