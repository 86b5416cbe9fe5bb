use std::sync::Arc;
use tracing::{info, warn};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::contacts::dtos::CreateContactRequestDto;
use crate::features::contacts::models::ContactRequest;
use crate::features::contacts::repository::ContactRepository;
use crate::features::freelancers::repository::FreelancerRepository;
use crate::features::notifications::{ContactNotification, ContractorData, NotificationDispatcher};

/// Stores contact requests and notifies the freelancer
pub struct ContactService {
    contacts: Arc<dyn ContactRepository>,
    freelancers: Arc<dyn FreelancerRepository>,
    dispatcher: Arc<dyn NotificationDispatcher>,
}

impl ContactService {
    pub fn new(
        contacts: Arc<dyn ContactRepository>,
        freelancers: Arc<dyn FreelancerRepository>,
        dispatcher: Arc<dyn NotificationDispatcher>,
    ) -> Self {
        Self {
            contacts,
            freelancers,
            dispatcher,
        }
    }

    /// Persist a contact request, then notify the freelancer.
    ///
    /// The notification runs only after the insert has completed and its
    /// outcome never changes the result: a failure is logged and dropped.
    pub async fn submit(&self, dto: CreateContactRequestDto) -> Result<ContactRequest> {
        let dto = dto.trimmed();
        dto.validate().map_err(AppError::from_validation)?;

        let freelancer = self
            .freelancers
            .find_by_id(dto.freelancer_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Freelancer {} not found", dto.freelancer_id))
            })?;

        let request = self.contacts.insert(dto.into_new_contact_request()).await?;

        info!(
            "Contact request stored: id={}, freelancer_id={}",
            request.id, request.freelancer_id
        );

        let notification = ContactNotification {
            freelancer_email: freelancer.email,
            freelancer_name: freelancer.full_name,
            contractor_data: ContractorData {
                contractor_name: request.contractor_name.clone(),
                email: request.email.clone(),
                phone: request.phone.clone(),
                work_address: request.work_address.clone(),
                daily_rate: request.daily_rate,
                project_description: request.project_description.clone(),
            },
        };

        if let Err(e) = self.dispatcher.dispatch(&notification).await {
            warn!(
                "Contact notification failed for request {}: {}",
                request.id, e
            );
        }

        Ok(request)
    }
}
