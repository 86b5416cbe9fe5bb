mod freelancer_handler;

pub use freelancer_handler::*;
