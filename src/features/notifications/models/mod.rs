mod contact_notification;

pub use contact_notification::{ContactNotification, ContractorData};
