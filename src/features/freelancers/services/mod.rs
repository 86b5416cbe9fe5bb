mod listing_service;
mod registration_service;

pub use listing_service::ListingService;
pub use registration_service::RegistrationService;
