use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::str::FromStr;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::core::error::AppError;
use crate::features::freelancers::models::{
    Availability, Freelancer, Gender, NewFreelancer, Region, ReviewState,
};
use crate::shared::constants::{
    MAX_FREELANCER_AGE, MAX_PHOTO_SIZE, MIN_FREELANCER_AGE, REGISTRATION_REDIRECT_DELAY_MS,
    REGISTRATION_REDIRECT_TO,
};
use crate::shared::validation::{validate_daily_rate, validate_not_blank, PHONE_REGEX};

/// Registration form for OpenAPI documentation
/// Note: This struct is for Swagger UI documentation only.
/// The actual handler reads axum's Multipart extractor into [`RegistrationForm`].
#[derive(Debug, ToSchema)]
#[schema(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct RegisterFreelancerDto {
    #[schema(example = "Ana Silva")]
    pub full_name: String,
    #[schema(example = "ana.silva@email.com")]
    pub email: String,
    #[schema(example = "(11) 99999-9999")]
    pub phone: String,
    #[schema(example = 28, minimum = 18, maximum = 80)]
    pub age: i32,
    pub gender: Option<Gender>,
    pub region: Region,
    /// Comma-delimited skills and experience
    #[schema(example = "Desenvolvimento Web, React, Node.js")]
    pub experiences: String,
    #[schema(example = "https://meuportfolio.com")]
    pub portfolio: Option<String>,
    #[schema(example = "250.00")]
    pub daily_rate: Option<String>,
    pub availability: Option<Availability>,
    /// Must be "true" to register
    pub accept_terms: bool,
    /// Optional profile photo (image/*, up to 5 MiB)
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub photo: Option<String>,
}

/// Raw registration fields as submitted by the form
///
/// Optional fields that arrive empty are stored as `None` by the handler.
#[derive(Debug, Clone, Default, Validate)]
pub struct RegistrationForm {
    #[validate(
        custom(function = "validate_not_blank", message = "fullName is required"),
        length(max = 255, message = "fullName must be at most 255 characters")
    )]
    pub full_name: String,

    #[validate(
        email(message = "email must be a valid email address"),
        length(max = 255, message = "email must be at most 255 characters")
    )]
    pub email: String,

    #[validate(
        regex(path = *PHONE_REGEX, message = "phone must be a valid phone number"),
        length(max = 50, message = "phone must be at most 50 characters")
    )]
    pub phone: String,

    #[validate(custom(function = "validate_age"))]
    pub age: String,

    #[validate(custom(function = "validate_gender"))]
    pub gender: Option<String>,

    #[validate(custom(function = "validate_region"))]
    pub region: String,

    #[validate(custom(function = "validate_not_blank", message = "experiences is required"))]
    pub experiences: String,

    #[validate(url(message = "portfolio must be a valid URL"))]
    pub portfolio: Option<String>,

    #[validate(custom(function = "validate_daily_rate_text"))]
    pub daily_rate: Option<String>,

    #[validate(custom(function = "validate_availability"))]
    pub availability: Option<String>,

    pub accept_terms: bool,
}

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

fn validate_age(value: &str) -> Result<(), ValidationError> {
    let age: i32 = value
        .trim()
        .parse()
        .map_err(|_| invalid("age", "age must be a whole number"))?;
    if !(MIN_FREELANCER_AGE..=MAX_FREELANCER_AGE).contains(&age) {
        return Err(invalid("age_range", "age must be between 18 and 80"));
    }
    Ok(())
}

fn validate_region(value: &str) -> Result<(), ValidationError> {
    Region::from_str(value)
        .map(|_| ())
        .map_err(|_| invalid("region", "region must be one of the supported cities"))
}

fn validate_gender(value: &str) -> Result<(), ValidationError> {
    Gender::from_str(value)
        .map(|_| ())
        .map_err(|_| invalid("gender", "gender is not a supported option"))
}

fn validate_availability(value: &str) -> Result<(), ValidationError> {
    Availability::from_str(value)
        .map(|_| ())
        .map_err(|_| invalid("availability", "availability is not a supported option"))
}

fn validate_daily_rate_text(value: &str) -> Result<(), ValidationError> {
    let rate = Decimal::from_str(value.trim())
        .map_err(|_| invalid("daily_rate", "dailyRate must be a number"))?;
    validate_daily_rate(&rate)
}

fn trim_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl RegistrationForm {
    /// Validate every field and convert into insertable profile data.
    ///
    /// Does not look at `accept_terms`; the workflow checks that first.
    pub fn into_new_freelancer(self) -> Result<NewFreelancer, AppError> {
        let form = self.trimmed();
        form.validate().map_err(AppError::from_validation)?;

        let age = form
            .age
            .trim()
            .parse::<i32>()
            .map_err(|_| AppError::Validation("age must be a whole number".to_string()))?;
        let region = form.region.parse::<Region>().map_err(AppError::Validation)?;
        let gender = form
            .gender
            .as_deref()
            .map(Gender::from_str)
            .transpose()
            .map_err(AppError::Validation)?;
        let availability = form
            .availability
            .as_deref()
            .map(Availability::from_str)
            .transpose()
            .map_err(AppError::Validation)?;
        let daily_rate = form
            .daily_rate
            .as_deref()
            .map(|r| Decimal::from_str(r.trim()))
            .transpose()
            .map_err(|_| AppError::Validation("dailyRate must be a number".to_string()))?;

        Ok(NewFreelancer {
            full_name: form.full_name,
            email: form.email,
            phone: form.phone,
            age,
            gender,
            region,
            experiences: form.experiences,
            portfolio_url: form.portfolio,
            daily_rate,
            availability,
            photo_url: None,
        })
    }

    /// Strips surrounding whitespace so the stored text is what gets validated
    fn trimmed(self) -> Self {
        Self {
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            age: self.age.trim().to_string(),
            gender: trim_optional(self.gender),
            region: self.region.trim().to_string(),
            experiences: self.experiences.trim().to_string(),
            portfolio: trim_optional(self.portfolio),
            daily_rate: trim_optional(self.daily_rate),
            availability: trim_optional(self.availability),
            accept_terms: self.accept_terms,
        }
    }
}

/// Image selected alongside the registration form
#[derive(Debug, Clone)]
pub struct PhotoUpload {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl PhotoUpload {
    /// Checks media type and size; runs before any upload is attempted
    pub fn validate(&self) -> Result<(), AppError> {
        if !self.content_type.starts_with("image/") {
            return Err(AppError::Validation(format!(
                "photo must be an image, got '{}'",
                self.content_type
            )));
        }
        if self.data.len() > MAX_PHOTO_SIZE {
            return Err(AppError::Validation(format!(
                "photo too large. Maximum size is {} MB",
                MAX_PHOTO_SIZE / 1024 / 1024
            )));
        }
        Ok(())
    }

    /// Lowercased extension of the original file name, falling back to the media subtype
    pub fn extension(&self) -> String {
        let from_name = self
            .file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()));

        match from_name {
            Some(ext) => ext.to_ascii_lowercase(),
            None => match self.content_type.as_str() {
                "image/jpeg" => "jpg".to_string(),
                other => other
                    .strip_prefix("image/")
                    .filter(|s| s.chars().all(|c| c.is_ascii_alphanumeric()))
                    .unwrap_or("img")
                    .to_string(),
            },
        }
    }
}

/// Query parameters for the public listing
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ListFreelancersQuery {
    /// Exact region match
    pub region: Option<String>,
    /// Case-sensitive substring of the experience text
    pub experience: Option<String>,
    /// Exact gender match
    pub gender: Option<String>,
}

/// Public representation of a freelancer profile
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FreelancerResponseDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub age: i32,
    pub gender: Option<String>,
    pub region: String,
    pub experiences: String,
    /// Experience text split into tags
    pub skills: Vec<String>,
    pub portfolio_url: Option<String>,
    #[schema(value_type = Option<String>, example = "250.00")]
    pub daily_rate: Option<Decimal>,
    pub availability: Option<String>,
    pub photo_url: Option<String>,
    pub review_state: ReviewState,
    pub created_at: DateTime<Utc>,
}

impl From<Freelancer> for FreelancerResponseDto {
    fn from(f: Freelancer) -> Self {
        let skills = f.skills();
        let review_state = f.review_state();
        Self {
            id: f.id,
            name: f.full_name,
            email: f.email,
            phone: f.phone,
            age: f.age,
            gender: f.gender,
            region: f.region,
            experiences: f.experiences,
            skills,
            portfolio_url: f.portfolio_url,
            daily_rate: f.daily_rate,
            availability: f.availability,
            photo_url: f.photo_url,
            review_state,
            created_at: f.created_at,
        }
    }
}

/// Response for a completed registration
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationResponseDto {
    pub freelancer: FreelancerResponseDto,
    /// Path the client navigates to after showing the confirmation
    pub redirect_to: String,
    /// Delay before that navigation
    pub redirect_after_ms: u64,
}

impl RegistrationResponseDto {
    pub fn new(freelancer: Freelancer) -> Self {
        Self {
            freelancer: freelancer.into(),
            redirect_to: REGISTRATION_REDIRECT_TO.to_string(),
            redirect_after_ms: REGISTRATION_REDIRECT_DELAY_MS,
        }
    }
}
