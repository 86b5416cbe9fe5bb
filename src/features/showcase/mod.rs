//! Sponsors and job openings shown next to the freelancer directory.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/sponsors` | No | List sponsors |
//! | GET | `/api/jobs` | No | List job openings |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;

pub use repository::{PgShowcaseRepository, ShowcaseRepository};
pub use services::ShowcaseService;
