//! Fixtures and in-memory stand-ins for the external collaborators.
//!
//! Every fake records what it was asked to do so tests can assert that a
//! failed submission left no side effects behind.

use async_trait::async_trait;
use chrono::Utc;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use rust_decimal::Decimal;
use serde_json::json;
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use uuid::Uuid;

use crate::core::config::AdminAuthConfig;
use crate::core::error::{AppError, Result};
use crate::features::admin::models::{AdminUser, DashboardStats};
use crate::features::admin::repository::AdminRepository;
use crate::features::contacts::models::{
    ContactRequest, ContactRequestWithFreelancer, ContactStatus, NewContactRequest,
};
use crate::features::contacts::repository::ContactRepository;
use crate::features::freelancers::dtos::RegistrationForm;
use crate::features::freelancers::models::{Freelancer, NewFreelancer};
use crate::features::freelancers::repository::FreelancerRepository;
use crate::features::notifications::{
    ContactNotification, ContractorData, NotificationDispatcher, NotificationError,
};
use crate::features::showcase::models::{JobListing, Sponsor};
use crate::features::showcase::repository::ShowcaseRepository;
use crate::modules::mailer::{EmailMessage, MailError, MailProvider};
use crate::modules::storage::ObjectStore;

// =============================================================================
// FIXTURES
// =============================================================================

/// An approved profile with generated contact details
pub fn sample_freelancer(region: &str, experiences: &str) -> Freelancer {
    let now = Utc::now();
    Freelancer {
        id: Uuid::new_v4(),
        full_name: Name().fake(),
        email: SafeEmail().fake(),
        phone: "(11) 99999-9999".to_string(),
        age: 30,
        gender: None,
        region: region.to_string(),
        experiences: experiences.to_string(),
        portfolio_url: None,
        daily_rate: Some(Decimal::from(200)),
        availability: Some("flexible".to_string()),
        photo_url: None,
        approved: true,
        reviewed_at: None,
        created_at: now,
        updated_at: now,
    }
}

/// A registration form that passes every check
pub fn registration_form() -> RegistrationForm {
    RegistrationForm {
        full_name: Name().fake(),
        email: SafeEmail().fake(),
        phone: "(11) 98765-4321".to_string(),
        age: "29".to_string(),
        gender: Some("Outro".to_string()),
        region: "Belo Horizonte".to_string(),
        experiences: "Redação, Revisão de Textos".to_string(),
        portfolio: Some("https://portfolio.example.com".to_string()),
        daily_rate: Some("180".to_string()),
        availability: Some("parttime".to_string()),
        accept_terms: true,
    }
}

pub fn contact_notification() -> ContactNotification {
    ContactNotification {
        freelancer_email: "ana.silva@email.com".to_string(),
        freelancer_name: "Ana Silva".to_string(),
        contractor_data: ContractorData {
            contractor_name: "Carlos Souza".to_string(),
            email: "carlos@empresa.com".to_string(),
            phone: "(21) 98888-7777".to_string(),
            work_address: "Av. Atlântica, 500".to_string(),
            daily_rate: Decimal::from_str("250.5").unwrap(),
            project_description: Some("Reforma de apartamento".to_string()),
        },
    }
}

pub fn admin_auth_config() -> AdminAuthConfig {
    AdminAuthConfig {
        jwt_secret: "test-secret-that-is-long-enough-for-hs256".to_string(),
        issuer: "freelancehub".to_string(),
        session_ttl: Duration::from_secs(3600),
        bootstrap_username: None,
        bootstrap_password: None,
    }
}

fn unavailable() -> AppError {
    AppError::Database(sqlx::Error::PoolTimedOut)
}

// =============================================================================
// FREELANCERS
// =============================================================================

#[derive(Default)]
pub struct InMemoryFreelancerRepository {
    rows: Mutex<Vec<Freelancer>>,
    inserts: AtomicUsize,
    fail: bool,
}

impl InMemoryFreelancerRepository {
    /// Every call fails as if the database were unreachable
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Add rows directly, in the given order
    pub fn seed(&self, freelancers: Vec<Freelancer>) {
        self.rows.lock().unwrap().extend(freelancers);
    }

    pub fn all(&self) -> Vec<Freelancer> {
        self.rows.lock().unwrap().clone()
    }

    pub fn insert_count(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FreelancerRepository for InMemoryFreelancerRepository {
    async fn insert(&self, f: NewFreelancer) -> Result<Freelancer> {
        if self.fail {
            return Err(unavailable());
        }
        let now = Utc::now();
        let freelancer = Freelancer {
            id: Uuid::new_v4(),
            full_name: f.full_name,
            email: f.email,
            phone: f.phone,
            age: f.age,
            gender: f.gender.map(|g| g.as_str().to_string()),
            region: f.region.as_str().to_string(),
            experiences: f.experiences,
            portfolio_url: f.portfolio_url,
            daily_rate: f.daily_rate,
            availability: f.availability.map(|a| a.as_str().to_string()),
            photo_url: f.photo_url,
            approved: false,
            reviewed_at: None,
            created_at: now,
            updated_at: now,
        };
        self.inserts.fetch_add(1, Ordering::SeqCst);
        self.rows.lock().unwrap().push(freelancer.clone());
        Ok(freelancer)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Freelancer>> {
        if self.fail {
            return Err(unavailable());
        }
        Ok(self.rows.lock().unwrap().iter().find(|f| f.id == id).cloned())
    }

    async fn list_approved(&self) -> Result<Vec<Freelancer>> {
        if self.fail {
            return Err(unavailable());
        }
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|f| f.approved)
            .cloned()
            .collect())
    }

    async fn list_pending(&self, offset: i64, limit: i64) -> Result<(Vec<Freelancer>, i64)> {
        if self.fail {
            return Err(unavailable());
        }
        let pending: Vec<Freelancer> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|f| !f.approved && f.reviewed_at.is_none())
            .cloned()
            .collect();
        let total = pending.len() as i64;
        let page = pending
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();
        Ok((page, total))
    }

    async fn set_review(&self, id: Uuid, approved: bool) -> Result<Option<Freelancer>> {
        if self.fail {
            return Err(unavailable());
        }
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.iter_mut().find(|f| f.id == id).map(|f| {
            let now = Utc::now();
            f.approved = approved;
            f.reviewed_at = Some(now);
            f.updated_at = now;
            f.clone()
        }))
    }
}

// =============================================================================
// OBJECT STORE
// =============================================================================

#[derive(Default)]
pub struct RecordingObjectStore {
    uploads: Mutex<Vec<(String, String, usize)>>,
    fail: bool,
}

impl RecordingObjectStore {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// `(key, content_type, size)` for every successful upload
    pub fn uploads(&self) -> Vec<(String, String, usize)> {
        self.uploads.lock().unwrap().clone()
    }

    pub fn upload_count(&self) -> usize {
        self.uploads.lock().unwrap().len()
    }
}

#[async_trait]
impl ObjectStore for RecordingObjectStore {
    fn public_key(&self, path: &str) -> String {
        format!("public/{}", path)
    }

    async fn upload(
        &self,
        key: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> std::result::Result<String, AppError> {
        if self.fail {
            return Err(AppError::Upload("storage unavailable".to_string()));
        }
        self.uploads
            .lock()
            .unwrap()
            .push((key.to_string(), content_type.to_string(), data.len()));
        Ok(key.to_string())
    }

    fn public_url(&self, key: &str) -> String {
        format!("http://localhost:9000/freelancehub-uploads/{}", key)
    }
}

// =============================================================================
// CONTACTS
// =============================================================================

#[derive(Default)]
pub struct InMemoryContactRepository {
    rows: Mutex<Vec<ContactRequest>>,
    fail: bool,
}

impl InMemoryContactRepository {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn all(&self) -> Vec<ContactRequest> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn insert(&self, r: NewContactRequest) -> Result<ContactRequest> {
        if self.fail {
            return Err(unavailable());
        }
        let request = ContactRequest {
            id: Uuid::new_v4(),
            freelancer_id: r.freelancer_id,
            contractor_name: r.contractor_name,
            email: r.email,
            phone: r.phone,
            work_address: r.work_address,
            daily_rate: r.daily_rate,
            project_description: r.project_description,
            status: ContactStatus::Pending.as_str().to_string(),
            created_at: Utc::now(),
        };
        self.rows.lock().unwrap().push(request.clone());
        Ok(request)
    }

    async fn list_recent(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<ContactRequestWithFreelancer>, i64)> {
        if self.fail {
            return Err(unavailable());
        }
        let rows = self.rows.lock().unwrap();
        let total = rows.len() as i64;
        let page = rows
            .iter()
            .rev()
            .skip(offset as usize)
            .take(limit as usize)
            .map(|r| ContactRequestWithFreelancer {
                request: r.clone(),
                freelancer_name: format!("Freelancer {}", r.freelancer_id),
            })
            .collect();
        Ok((page, total))
    }
}

// =============================================================================
// NOTIFICATIONS AND MAIL
// =============================================================================

#[derive(Default)]
pub struct RecordingDispatcher {
    dispatched: Mutex<Vec<ContactNotification>>,
    attempts: AtomicUsize,
    fail: bool,
}

impl RecordingDispatcher {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Notifications that were delivered
    pub fn dispatched(&self) -> Vec<ContactNotification> {
        self.dispatched.lock().unwrap().clone()
    }

    /// Delivery attempts, successful or not
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NotificationDispatcher for RecordingDispatcher {
    async fn dispatch(
        &self,
        notification: &ContactNotification,
    ) -> std::result::Result<serde_json::Value, NotificationError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(NotificationError::Rejected {
                status: 500,
                body: r#"{"error":"mail provider not configured"}"#.to_string(),
            });
        }
        self.dispatched.lock().unwrap().push(notification.clone());
        Ok(json!({ "id": "email-1" }))
    }
}

#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<EmailMessage>>,
    fail: bool,
}

impl RecordingMailer {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MailProvider for RecordingMailer {
    async fn send(
        &self,
        message: &EmailMessage,
    ) -> std::result::Result<serde_json::Value, MailError> {
        if self.fail {
            return Err(MailError::Transport("connection refused".to_string()));
        }
        self.sent.lock().unwrap().push(message.clone());
        Ok(json!({ "id": "email-1" }))
    }
}

// =============================================================================
// ADMIN
// =============================================================================

#[derive(Default)]
pub struct InMemoryAdminRepository {
    admins: Mutex<Vec<AdminUser>>,
    stats: DashboardStats,
}

impl InMemoryAdminRepository {
    pub fn with_stats(stats: DashboardStats) -> Self {
        Self {
            stats,
            ..Self::default()
        }
    }
}

#[async_trait]
impl AdminRepository for InMemoryAdminRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<AdminUser>> {
        Ok(self
            .admins
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.username == username)
            .cloned())
    }

    async fn create(&self, username: &str, password_hash: &str) -> Result<AdminUser> {
        let admin = AdminUser {
            id: Uuid::new_v4(),
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        };
        self.admins.lock().unwrap().push(admin.clone());
        Ok(admin)
    }

    async fn dashboard_stats(&self) -> Result<DashboardStats> {
        Ok(self.stats.clone())
    }
}

// =============================================================================
// SHOWCASE
// =============================================================================

pub struct InMemoryShowcaseRepository {
    sponsors: Vec<Sponsor>,
    jobs: Vec<JobListing>,
}

impl InMemoryShowcaseRepository {
    /// The rows the initial migration seeds, deliberately out of order
    pub fn seeded() -> Self {
        let sponsor = |name: &str, logo: &str, description: &str, order: i32| Sponsor {
            id: Uuid::new_v4(),
            name: name.to_string(),
            logo: logo.to_string(),
            description: description.to_string(),
            display_order: order,
        };
        let job = |title: &str, location: &str, budget: &str, order: i32| JobListing {
            id: Uuid::new_v4(),
            title: title.to_string(),
            location: location.to_string(),
            budget: budget.to_string(),
            display_order: order,
        };

        Self {
            sponsors: vec![
                sponsor("WebDev", "💻", "Desenvolvimento Web", 3),
                sponsor("TechCorp", "🏢", "Soluções em TI", 1),
                sponsor("DesignPro", "🎨", "Design Gráfico", 2),
            ],
            jobs: vec![
                job("Redator de Conteúdo", "Belo Horizonte", "R$ 150/dia", 3),
                job("Designer UX/UI", "Rio de Janeiro", "R$ 250/dia", 2),
                job("Desenvolvedor React", "São Paulo", "R$ 300/dia", 1),
            ],
        }
    }
}

#[async_trait]
impl ShowcaseRepository for InMemoryShowcaseRepository {
    async fn list_sponsors(&self) -> Result<Vec<Sponsor>> {
        let mut sponsors = self.sponsors.clone();
        sponsors.sort_by_key(|s| s.display_order);
        Ok(sponsors)
    }

    async fn list_jobs(&self) -> Result<Vec<JobListing>> {
        let mut jobs = self.jobs.clone();
        jobs.sort_by_key(|j| j.display_order);
        Ok(jobs)
    }
}
