use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::freelancers::dtos::{PhotoUpload, RegistrationForm};
use crate::features::freelancers::models::Freelancer;
use crate::features::freelancers::repository::FreelancerRepository;
use crate::modules::storage::ObjectStore;
use crate::shared::constants::PHOTO_FOLDER;

/// Freelancer registration: validate, upload the optional photo, insert
pub struct RegistrationService {
    repository: Arc<dyn FreelancerRepository>,
    object_store: Arc<dyn ObjectStore>,
}

impl RegistrationService {
    pub fn new(
        repository: Arc<dyn FreelancerRepository>,
        object_store: Arc<dyn ObjectStore>,
    ) -> Self {
        Self {
            repository,
            object_store,
        }
    }

    /// Register a freelancer profile in the unapproved state.
    ///
    /// All validation happens before the first side effect. A failed upload
    /// aborts before the insert, so a record never exists without the photo
    /// that was submitted with it.
    pub async fn register(
        &self,
        form: RegistrationForm,
        photo: Option<PhotoUpload>,
    ) -> Result<Freelancer> {
        if !form.accept_terms {
            return Err(AppError::Validation(
                "You must accept the terms of responsibility".to_string(),
            ));
        }

        let mut new_freelancer = form.into_new_freelancer()?;

        if let Some(photo) = &photo {
            photo.validate()?;
        }

        if let Some(photo) = photo {
            new_freelancer.photo_url = Some(self.store_photo(photo).await?);
        }

        let freelancer = self.repository.insert(new_freelancer).await?;

        info!(
            "Freelancer registered: id={}, region={}, has_photo={}",
            freelancer.id,
            freelancer.region,
            freelancer.photo_url.is_some()
        );

        Ok(freelancer)
    }

    /// Upload under a fresh unique name and resolve its public URL
    async fn store_photo(&self, photo: PhotoUpload) -> Result<String> {
        let path = format!("{}/{}.{}", PHOTO_FOLDER, Uuid::new_v4(), photo.extension());
        let key = self.object_store.public_key(&path);

        self.object_store
            .upload(&key, photo.data, &photo.content_type)
            .await?;

        debug!("Profile photo uploaded: {}", key);

        Ok(self.object_store.public_url(&key))
    }
}
