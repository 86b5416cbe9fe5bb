//! Modules layer - Infrastructure components for external integrations
//!
//! Contains clients and adapters for object storage and the mail provider.

pub mod mailer;
pub mod storage;
