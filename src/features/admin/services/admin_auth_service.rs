use std::sync::Arc;
use tracing::{info, warn};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::admin::dtos::{LoginDto, LoginResponseDto};
use crate::features::admin::password::PasswordHasher;
use crate::features::admin::repository::AdminRepository;
use crate::features::admin::session::SessionTokenService;

const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Admin login and account bootstrap
pub struct AdminAuthService {
    repository: Arc<dyn AdminRepository>,
    hasher: PasswordHasher,
    tokens: Arc<SessionTokenService>,
}

impl AdminAuthService {
    pub fn new(repository: Arc<dyn AdminRepository>, tokens: Arc<SessionTokenService>) -> Self {
        Self {
            repository,
            hasher: PasswordHasher::new(),
            tokens,
        }
    }

    /// Check credentials and issue a session token.
    ///
    /// Unknown user and wrong password produce the same error.
    pub async fn login(&self, dto: LoginDto) -> Result<LoginResponseDto> {
        dto.validate().map_err(AppError::from_validation)?;

        let username = dto.username.trim();
        let Some(admin) = self.repository.find_by_username(username).await? else {
            warn!("Admin login failed: unknown user");
            return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        };

        if !self
            .hasher
            .verify_password(&dto.password, &admin.password_hash)?
        {
            warn!("Admin login failed: wrong password for {}", admin.username);
            return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        }

        let (token, session) = self.tokens.issue(&admin)?;

        info!("Admin logged in: {}", admin.username);

        Ok(LoginResponseDto::new(token, session))
    }

    /// Create the admin account if it does not exist yet. Returns whether one was created.
    pub async fn ensure_admin(&self, username: &str, password: &str) -> Result<bool> {
        if self.repository.find_by_username(username).await?.is_some() {
            return Ok(false);
        }

        let hash = self.hasher.hash_password(password)?;
        let admin = self.repository.create(username, &hash).await?;

        info!("Bootstrap admin created: {}", admin.username);

        Ok(true)
    }
}
