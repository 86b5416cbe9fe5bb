mod contact_request_dto;

pub use contact_request_dto::*;
