//! Contact notifications, both ends of the wire.
//!
//! The contact workflow dispatches through [`NotificationDispatcher`]; the
//! HTTP implementation calls the send-contact-email function, which this
//! feature also serves and which delivers mail through the configured
//! [`MailProvider`](crate::modules::mailer::MailProvider).
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | OPTIONS | `/functions/v1/send-contact-email` | No | CORS preflight |
//! | POST | `/functions/v1/send-contact-email` | No | Email a freelancer about a contact request |

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use models::{ContactNotification, ContractorData};
pub use services::{
    ContactEmailService, HttpNotificationDispatcher, NotificationDispatcher, NotificationError,
};
