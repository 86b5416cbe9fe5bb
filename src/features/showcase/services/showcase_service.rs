use std::sync::Arc;

use crate::core::error::Result;
use crate::features::showcase::dtos::{JobListingResponseDto, SponsorResponseDto};
use crate::features::showcase::repository::ShowcaseRepository;

pub struct ShowcaseService {
    repository: Arc<dyn ShowcaseRepository>,
}

impl ShowcaseService {
    pub fn new(repository: Arc<dyn ShowcaseRepository>) -> Self {
        Self { repository }
    }

    pub async fn sponsors(&self) -> Result<Vec<SponsorResponseDto>> {
        let sponsors = self.repository.list_sponsors().await?;
        Ok(sponsors.into_iter().map(Into::into).collect())
    }

    pub async fn jobs(&self) -> Result<Vec<JobListingResponseDto>> {
        let jobs = self.repository.list_jobs().await?;
        Ok(jobs.into_iter().map(Into::into).collect())
    }
}
