//! Outbound transactional email
//!
//! [`MailProvider`] is the seam the send-contact-email function talks to;
//! [`ResendClient`] implements it against the Resend REST API.

mod resend_client;

pub use resend_client::ResendClient;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// A single HTML email ready to hand to the provider
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EmailMessage {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
}

#[derive(Debug, Error)]
pub enum MailError {
    #[error("mail provider not configured")]
    NotConfigured,

    #[error("mail provider request failed: {0}")]
    Transport(String),

    #[error("mail provider rejected the message (HTTP {status}): {body}")]
    Rejected { status: u16, body: String },
}

#[async_trait]
pub trait MailProvider: Send + Sync {
    /// Send the message and return the provider's response body
    async fn send(&self, message: &EmailMessage) -> Result<serde_json::Value, MailError>;
}
