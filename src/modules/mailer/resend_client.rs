use async_trait::async_trait;

use crate::core::config::MailConfig;
use crate::modules::mailer::{EmailMessage, MailError, MailProvider};

/// Client for the Resend `POST /emails` endpoint
pub struct ResendClient {
    api_key: Option<String>,
    api_url: String,
    http_client: reqwest::Client,
}

impl ResendClient {
    pub fn new(config: &MailConfig) -> Self {
        Self {
            api_key: config.api_key.clone(),
            api_url: config.api_url.trim_end_matches('/').to_string(),
            http_client: reqwest::Client::new(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

#[async_trait]
impl MailProvider for ResendClient {
    async fn send(&self, message: &EmailMessage) -> Result<serde_json::Value, MailError> {
        let api_key = self.api_key.as_deref().ok_or(MailError::NotConfigured)?;
        let url = format!("{}/emails", self.api_url);

        tracing::debug!("Sending email via Resend to {} recipient(s)", message.to.len());

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(api_key)
            .json(message)
            .send()
            .await
            .map_err(|e| MailError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MailError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| MailError::Transport(format!("Invalid provider response: {}", e)))
    }
}
