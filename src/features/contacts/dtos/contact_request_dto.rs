use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::contacts::models::{
    ContactRequest, ContactRequestWithFreelancer, ContactStatus, NewContactRequest,
};
use crate::shared::validation::{validate_daily_rate, validate_not_blank};

/// Request DTO for contacting a freelancer
///
/// `dailyRate` may be sent as a JSON number or a decimal string.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactRequestDto {
    pub freelancer_id: Uuid,

    #[validate(
        custom(function = "validate_not_blank", message = "contractorName is required"),
        length(max = 255, message = "contractorName must be at most 255 characters")
    )]
    #[schema(example = "Carlos Souza", max_length = 255)]
    pub contractor_name: String,

    #[validate(
        custom(function = "validate_not_blank", message = "phone is required"),
        length(max = 50, message = "phone must be at most 50 characters")
    )]
    #[schema(example = "(21) 98888-7777", max_length = 50)]
    pub phone: String,

    #[validate(
        email(message = "email must be a valid email address"),
        length(max = 255, message = "email must be at most 255 characters")
    )]
    #[schema(example = "carlos@empresa.com", max_length = 255)]
    pub email: String,

    #[validate(custom(function = "validate_not_blank", message = "workAddress is required"))]
    #[schema(example = "Av. Paulista, 1000 - São Paulo")]
    pub work_address: String,

    #[validate(custom(function = "validate_daily_rate"))]
    #[schema(value_type = String, example = "250.50")]
    pub daily_rate: Decimal,

    #[serde(default)]
    pub project_description: Option<String>,
}

impl CreateContactRequestDto {
    /// Strips surrounding whitespace; run before `validate` so limits apply to stored text
    pub fn trimmed(self) -> Self {
        Self {
            freelancer_id: self.freelancer_id,
            contractor_name: self.contractor_name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            work_address: self.work_address.trim().to_string(),
            daily_rate: self.daily_rate,
            project_description: self
                .project_description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
        }
    }

    pub fn into_new_contact_request(self) -> NewContactRequest {
        let dto = self.trimmed();
        NewContactRequest {
            freelancer_id: dto.freelancer_id,
            contractor_name: dto.contractor_name,
            email: dto.email,
            phone: dto.phone,
            work_address: dto.work_address,
            daily_rate: dto.daily_rate,
            project_description: dto.project_description,
        }
    }
}

/// Response DTO for a stored contact request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequestResponseDto {
    pub id: Uuid,
    pub freelancer_id: Uuid,
    pub contractor_name: String,
    pub email: String,
    pub phone: String,
    pub work_address: String,
    #[schema(value_type = String, example = "250.50")]
    pub daily_rate: Decimal,
    pub project_description: Option<String>,
    pub status: ContactStatus,
    pub created_at: DateTime<Utc>,
}

impl From<ContactRequest> for ContactRequestResponseDto {
    fn from(c: ContactRequest) -> Self {
        let status = c.status();
        Self {
            id: c.id,
            freelancer_id: c.freelancer_id,
            contractor_name: c.contractor_name,
            email: c.email,
            phone: c.phone,
            work_address: c.work_address,
            daily_rate: c.daily_rate,
            project_description: c.project_description,
            status,
            created_at: c.created_at,
        }
    }
}

/// Admin view of a contact request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequestOverviewDto {
    #[serde(flatten)]
    pub request: ContactRequestResponseDto,
    pub freelancer_name: String,
}

impl From<ContactRequestWithFreelancer> for ContactRequestOverviewDto {
    fn from(row: ContactRequestWithFreelancer) -> Self {
        Self {
            request: row.request.into(),
            freelancer_name: row.freelancer_name,
        }
    }
}
