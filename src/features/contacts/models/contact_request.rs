use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

/// Database model for a contractor's contact request
#[derive(Debug, Clone, FromRow)]
pub struct ContactRequest {
    pub id: Uuid,
    pub freelancer_id: Uuid,
    pub contractor_name: String,
    pub email: String,
    pub phone: String,
    pub work_address: String,
    pub daily_rate: Decimal,
    pub project_description: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Contact request joined with the name of the freelancer it targets
#[derive(Debug, Clone, FromRow)]
pub struct ContactRequestWithFreelancer {
    #[sqlx(flatten)]
    pub request: ContactRequest,
    pub freelancer_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewContactRequest {
    pub freelancer_id: Uuid,
    pub contractor_name: String,
    pub email: String,
    pub phone: String,
    pub work_address: String,
    pub daily_rate: Decimal,
    pub project_description: Option<String>,
}

/// Stored for display only; nothing moves a request out of `Pending`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    Pending,
    Approved,
}

impl ContactStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactStatus::Pending => "pending",
            ContactStatus::Approved => "approved",
        }
    }
}

impl FromStr for ContactStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ContactStatus::Pending),
            "approved" => Ok(ContactStatus::Approved),
            other => Err(format!("Unknown contact status: {}", other)),
        }
    }
}

impl ContactRequest {
    /// Unknown stored values read as pending
    pub fn status(&self) -> ContactStatus {
        self.status.parse().unwrap_or(ContactStatus::Pending)
    }
}
