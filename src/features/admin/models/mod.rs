mod admin_user;
mod session;

pub use admin_user::{AdminUser, DashboardStats};
pub use session::{AdminSession, GateDecision};
