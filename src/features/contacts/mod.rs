//! Contact requests from contractors to freelancers.
//!
//! A request is stored first; the freelancer is then notified by email on a
//! best-effort basis.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/contact-requests` | No | Contact a freelancer |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;

pub use repository::{ContactRepository, PgContactRepository};
pub use services::ContactService;
