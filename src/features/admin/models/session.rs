use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A verified admin session, placed in request extensions by the gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSession {
    pub admin_id: Uuid,
    pub username: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Outcome of checking a presented credential against the admin gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    Granted(AdminSession),
    RedirectToLogin,
}
