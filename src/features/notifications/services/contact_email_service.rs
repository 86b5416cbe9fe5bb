use minijinja::{context, Environment};
use std::sync::{Arc, OnceLock};
use thiserror::Error;

use crate::features::notifications::models::ContactNotification;
use crate::modules::mailer::{EmailMessage, MailError, MailProvider};

pub const CONTACT_EMAIL_SUBJECT: &str = "Nova solicitação de contato - FreelanceHub";

/// The `.html` suffix turns on HTML auto-escaping
const CONTACT_TEMPLATE_NAME: &str = "contact_request.html";
const CONTACT_TEMPLATE: &str = include_str!("../../../../templates/email/contact_request.html");

static TEMPLATE_ENV: OnceLock<Environment<'static>> = OnceLock::new();

#[derive(Debug, Error)]
pub enum ContactEmailError {
    #[error("failed to render email: {0}")]
    Render(#[from] minijinja::Error),

    #[error(transparent)]
    Mail(#[from] MailError),
}

/// Render the contact email body with every value HTML-escaped
pub fn render_contact_email(notification: &ContactNotification) -> Result<String, minijinja::Error> {
    let env = TEMPLATE_ENV.get_or_init(Environment::new);
    env.render_named_str(
        CONTACT_TEMPLATE_NAME,
        CONTACT_TEMPLATE,
        context! {
            freelancer_name => &notification.freelancer_name,
            contractor => &notification.contractor_data,
        },
    )
}

/// Backs the send-contact-email function
pub struct ContactEmailService {
    mailer: Arc<dyn MailProvider>,
    from: String,
}

impl ContactEmailService {
    pub fn new(mailer: Arc<dyn MailProvider>, from: String) -> Self {
        Self { mailer, from }
    }

    pub fn build_message(
        &self,
        notification: &ContactNotification,
    ) -> Result<EmailMessage, ContactEmailError> {
        Ok(EmailMessage {
            from: self.from.clone(),
            to: vec![notification.freelancer_email.clone()],
            subject: CONTACT_EMAIL_SUBJECT.to_string(),
            html: render_contact_email(notification)?,
        })
    }

    /// Send the email and return the provider response untouched
    pub async fn send(
        &self,
        notification: &ContactNotification,
    ) -> Result<serde_json::Value, ContactEmailError> {
        let message = self.build_message(notification)?;
        let response = self.mailer.send(&message).await?;

        tracing::info!("Contact email sent to freelancer {}", notification.freelancer_name);

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{contact_notification, RecordingMailer};

    #[test]
    fn test_render_lists_contractor_data() {
        let notification = contact_notification();
        let html = render_contact_email(&notification).unwrap();

        assert!(html.contains(&notification.contractor_data.contractor_name));
        assert!(html.contains(&notification.contractor_data.phone));
        assert!(html.contains("R$ 250.5"));
        assert!(html.contains("Descrição do projeto"));
    }

    #[test]
    fn test_render_omits_missing_project_description() {
        let mut notification = contact_notification();
        notification.contractor_data.project_description = None;
        assert!(!render_contact_email(&notification)
            .unwrap()
            .contains("Descrição do projeto"));

        notification.contractor_data.project_description = Some(String::new());
        assert!(!render_contact_email(&notification)
            .unwrap()
            .contains("Descrição do projeto"));
    }

    #[test]
    fn test_render_escapes_markup() {
        let mut notification = contact_notification();
        notification.contractor_data.contractor_name = "<script>alert(1)</script>".to_string();

        let html = render_contact_email(&notification).unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[tokio::test]
    async fn test_send_addresses_freelancer() {
        let mailer = Arc::new(RecordingMailer::default());
        let service = ContactEmailService::new(mailer.clone(), "Hub <hub@example.com>".to_string());
        let notification = contact_notification();

        let response = service.send(&notification).await.unwrap();

        assert_eq!(response["id"], "email-1");
        let sent = mailer.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].from, "Hub <hub@example.com>");
        assert_eq!(sent[0].to, vec![notification.freelancer_email]);
        assert_eq!(sent[0].subject, CONTACT_EMAIL_SUBJECT);
    }

    #[tokio::test]
    async fn test_send_propagates_provider_failure() {
        let service = ContactEmailService::new(
            Arc::new(RecordingMailer::failing()),
            "Hub <hub@example.com>".to_string(),
        );

        let err = service.send(&contact_notification()).await.unwrap_err();

        assert!(matches!(err, ContactEmailError::Mail(_)));
    }
}
