//! Signed admin session tokens and the gate decision built on them.
//!
//! Sessions are HS256 JWTs issued at login. The gate never errors: anything
//! that is not a currently valid token signed by us sends the caller back to
//! the login page.

use chrono::{DateTime, Duration as ChronoDuration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::core::config::AdminAuthConfig;
use crate::core::error::AppError;
use crate::features::admin::models::{AdminSession, AdminUser, GateDecision};

#[derive(Debug, Serialize, Deserialize)]
struct SessionClaims {
    sub: String,
    username: String,
    iss: String,
    iat: i64,
    exp: i64,
}

pub struct SessionTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    ttl: Duration,
}

impl SessionTokenService {
    pub fn new(config: &AdminAuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            issuer: config.issuer.clone(),
            ttl: config.session_ttl,
        }
    }

    /// Issue a token for `admin`, valid for the configured TTL from now
    pub fn issue(&self, admin: &AdminUser) -> Result<(String, AdminSession), AppError> {
        let ttl = ChronoDuration::from_std(self.ttl)
            .map_err(|e| AppError::Internal(format!("Invalid session TTL: {}", e)))?;
        self.issue_at(admin, Utc::now(), ttl)
    }

    fn issue_at(
        &self,
        admin: &AdminUser,
        issued_at: DateTime<Utc>,
        ttl: ChronoDuration,
    ) -> Result<(String, AdminSession), AppError> {
        let expires_at = issued_at + ttl;
        let claims = SessionClaims {
            sub: admin.id.to_string(),
            username: admin.username.clone(),
            iss: self.issuer.clone(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Failed to sign session token: {}", e)))?;

        Ok((
            token,
            AdminSession {
                admin_id: admin.id,
                username: admin.username.clone(),
                issued_at,
                expires_at,
            },
        ))
    }

    /// Verify signature, issuer and expiry
    pub fn verify(&self, token: &str) -> Option<AdminSession> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);
        validation.leeway = 0;

        let claims = match decode::<SessionClaims>(token, &self.decoding_key, &validation) {
            Ok(data) => data.claims,
            Err(e) => {
                tracing::debug!("Rejected admin session token: {}", e);
                return None;
            }
        };

        Some(AdminSession {
            admin_id: claims.sub.parse().ok()?,
            username: claims.username,
            issued_at: DateTime::from_timestamp(claims.iat, 0)?,
            expires_at: DateTime::from_timestamp(claims.exp, 0)?,
        })
    }

    /// Decide from the raw `Authorization` header value, if any
    pub fn decide(&self, authorization: Option<&str>) -> GateDecision {
        authorization
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .and_then(|token| self.verify(token))
            .map_or(GateDecision::RedirectToLogin, GateDecision::Granted)
    }
}
