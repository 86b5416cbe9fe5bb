mod contact_request;

pub use contact_request::{
    ContactRequest, ContactRequestWithFreelancer, ContactStatus, NewContactRequest,
};
