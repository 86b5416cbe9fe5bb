use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Payload handed to the email function after a contact request is stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactNotification {
    pub freelancer_email: String,
    pub freelancer_name: String,
    pub contractor_data: ContractorData,
}

/// Contractor details shown in the email body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContractorData {
    pub contractor_name: String,
    pub email: String,
    pub phone: String,
    pub work_address: String,
    #[schema(value_type = String, example = "250.50")]
    pub daily_rate: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_description: Option<String>,
}
