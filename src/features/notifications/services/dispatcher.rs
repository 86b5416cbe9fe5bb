use async_trait::async_trait;
use thiserror::Error;

use crate::core::config::NotificationConfig;
use crate::features::notifications::models::ContactNotification;

#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("notification request failed: {0}")]
    Transport(String),

    #[error("notification function returned HTTP {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("invalid notification response: {0}")]
    InvalidResponse(String),
}

/// Delivers contact notifications to the freelancer.
///
/// Callers treat delivery as best-effort; a failure here never undoes the
/// action that triggered it.
#[async_trait]
pub trait NotificationDispatcher: Send + Sync {
    async fn dispatch(
        &self,
        notification: &ContactNotification,
    ) -> Result<serde_json::Value, NotificationError>;
}

/// Calls the send-contact-email function over HTTP
pub struct HttpNotificationDispatcher {
    function_url: String,
    function_token: Option<String>,
    http_client: reqwest::Client,
}

impl HttpNotificationDispatcher {
    pub fn new(config: &NotificationConfig) -> Result<Self, NotificationError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| NotificationError::Transport(e.to_string()))?;

        Ok(Self {
            function_url: config.function_url.clone(),
            function_token: config.function_token.clone(),
            http_client,
        })
    }
}

#[async_trait]
impl NotificationDispatcher for HttpNotificationDispatcher {
    async fn dispatch(
        &self,
        notification: &ContactNotification,
    ) -> Result<serde_json::Value, NotificationError> {
        let mut request = self.http_client.post(&self.function_url).json(notification);
        if let Some(token) = &self.function_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| NotificationError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| NotificationError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(NotificationError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        if body.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }

        serde_json::from_str(&body).map_err(|e| NotificationError::InvalidResponse(e.to_string()))
    }
}
