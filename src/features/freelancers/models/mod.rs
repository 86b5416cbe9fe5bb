mod freelancer;

pub use freelancer::{Availability, Freelancer, Gender, NewFreelancer, Region, ReviewState};
