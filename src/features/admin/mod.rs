//! Admin panel: login, review of new freelancers and overview data.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/admin/login` | No | Exchange credentials for a session token |
//! | GET | `/api/admin/dashboard` | Admin | Aggregate counters |
//! | GET | `/api/admin/freelancers/pending` | Admin | Freelancers awaiting review |
//! | POST | `/api/admin/freelancers/{id}/approve` | Admin | Approve a freelancer |
//! | POST | `/api/admin/freelancers/{id}/reject` | Admin | Reject a freelancer |
//! | GET | `/api/admin/contact-requests` | Admin | Recent contact requests |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod password;
pub mod repository;
pub mod routes;
pub mod services;
pub mod session;

pub use models::{AdminSession, GateDecision};
pub use repository::{AdminRepository, PgAdminRepository};
pub use services::{AdminAuthService, AdminService};
pub use session::SessionTokenService;
