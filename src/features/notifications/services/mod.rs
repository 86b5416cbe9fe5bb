mod contact_email_service;
mod dispatcher;

pub use contact_email_service::{
    render_contact_email, ContactEmailError, ContactEmailService, CONTACT_EMAIL_SUBJECT,
};
pub use dispatcher::{HttpNotificationDispatcher, NotificationDispatcher, NotificationError};
