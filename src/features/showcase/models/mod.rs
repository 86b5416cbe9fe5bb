use sqlx::FromRow;
use uuid::Uuid;

/// Sidebar sponsor entry
#[derive(Debug, Clone, FromRow)]
pub struct Sponsor {
    pub id: Uuid,
    pub name: String,
    pub logo: String,
    pub description: String,
    pub display_order: i32,
}

/// Sidebar job listing entry
#[derive(Debug, Clone, FromRow)]
pub struct JobListing {
    pub id: Uuid,
    pub title: String,
    pub location: String,
    pub budget: String,
    pub display_order: i32,
}
