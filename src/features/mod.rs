//! Features layer - One module per business capability
//!
//! Each feature owns its models, DTOs, repository, services, handlers and routes.

pub mod admin;
pub mod contacts;
pub mod freelancers;
pub mod notifications;
pub mod showcase;
