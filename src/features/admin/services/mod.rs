mod admin_auth_service;
mod admin_service;

pub use admin_auth_service::AdminAuthService;
pub use admin_service::AdminService;
