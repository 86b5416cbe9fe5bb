use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::showcase::models::{JobListing, Sponsor};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SponsorResponseDto {
    pub id: Uuid,
    #[schema(example = "TechCorp")]
    pub name: String,
    /// Emoji or image URL
    #[schema(example = "🏢")]
    pub logo: String,
    #[schema(example = "Soluções em TI")]
    pub description: String,
}

impl From<Sponsor> for SponsorResponseDto {
    fn from(s: Sponsor) -> Self {
        Self {
            id: s.id,
            name: s.name,
            logo: s.logo,
            description: s.description,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobListingResponseDto {
    pub id: Uuid,
    #[schema(example = "Desenvolvedor React")]
    pub title: String,
    #[schema(example = "São Paulo")]
    pub location: String,
    /// Display text, not a number
    #[schema(example = "R$ 300/dia")]
    pub budget: String,
}

impl From<JobListing> for JobListingResponseDto {
    fn from(j: JobListing) -> Self {
        Self {
            id: j.id,
            title: j.title,
            location: j.location,
            budget: j.budget,
        }
    }
}
