//! Freelancer directory: public registration and the approved listing.
//!
//! Registrations arrive as multipart forms with an optional profile photo.
//! New profiles are hidden until an administrator approves them.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/freelancers` | No | List approved freelancers (region/experience/gender filters) |
//! | GET | `/api/freelancers/{id}` | No | Get an approved freelancer |
//! | POST | `/api/freelancers/register` | No | Register a new freelancer |

pub mod dtos;
pub mod filter;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;

pub use repository::{FreelancerRepository, PgFreelancerRepository};
pub use services::{ListingService, RegistrationService};
