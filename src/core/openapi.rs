use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::admin::{dtos as admin_dtos, handlers as admin_handlers};
use crate::features::contacts::{
    dtos as contacts_dtos, handlers as contacts_handlers, models as contacts_models,
};
use crate::features::freelancers::{
    dtos as freelancers_dtos, handlers as freelancers_handlers, models as freelancers_models,
};
use crate::features::notifications::{handlers as notifications_handlers, models as notifications_models};
use crate::features::showcase::{dtos as showcase_dtos, handlers as showcase_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Freelancers (public)
        freelancers_handlers::list_freelancers,
        freelancers_handlers::get_freelancer,
        freelancers_handlers::register_freelancer,
        // Contacts (public)
        contacts_handlers::create_contact_request,
        // Showcase (public)
        showcase_handlers::list_sponsors,
        showcase_handlers::list_jobs,
        // Admin
        admin_handlers::login,
        admin_handlers::dashboard,
        admin_handlers::list_pending_freelancers,
        admin_handlers::approve_freelancer,
        admin_handlers::reject_freelancer,
        admin_handlers::list_contact_requests,
        // Functions
        notifications_handlers::send_contact_email,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Freelancers
            freelancers_models::Region,
            freelancers_models::Gender,
            freelancers_models::Availability,
            freelancers_models::ReviewState,
            freelancers_dtos::RegisterFreelancerDto,
            freelancers_dtos::FreelancerResponseDto,
            freelancers_dtos::RegistrationResponseDto,
            ApiResponse<Vec<freelancers_dtos::FreelancerResponseDto>>,
            ApiResponse<freelancers_dtos::FreelancerResponseDto>,
            ApiResponse<freelancers_dtos::RegistrationResponseDto>,
            // Contacts
            contacts_models::ContactStatus,
            contacts_dtos::CreateContactRequestDto,
            contacts_dtos::ContactRequestResponseDto,
            contacts_dtos::ContactRequestOverviewDto,
            ApiResponse<contacts_dtos::ContactRequestResponseDto>,
            ApiResponse<Vec<contacts_dtos::ContactRequestOverviewDto>>,
            // Showcase
            showcase_dtos::SponsorResponseDto,
            showcase_dtos::JobListingResponseDto,
            ApiResponse<Vec<showcase_dtos::SponsorResponseDto>>,
            ApiResponse<Vec<showcase_dtos::JobListingResponseDto>>,
            // Admin
            admin_dtos::LoginDto,
            admin_dtos::AdminProfileDto,
            admin_dtos::LoginResponseDto,
            admin_dtos::DashboardStatsDto,
            ApiResponse<admin_dtos::LoginResponseDto>,
            ApiResponse<admin_dtos::DashboardStatsDto>,
            // Functions
            notifications_models::ContactNotification,
            notifications_models::ContractorData,
        )
    ),
    tags(
        (name = "freelancers", description = "Freelancer directory and registration (public)"),
        (name = "contacts", description = "Contractor contact requests (public)"),
        (name = "showcase", description = "Sponsors and featured job listings (public)"),
        (name = "admin", description = "Moderation and dashboard (admin session required)"),
        (name = "functions", description = "Edge function endpoints"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "FreelanceHub API",
        version = "0.1.0",
        description = "API documentation for FreelanceHub",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
