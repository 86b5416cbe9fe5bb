mod freelancer_dto;

pub use freelancer_dto::*;
