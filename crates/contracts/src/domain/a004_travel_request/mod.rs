pub mod aggregate;

pub use aggregate::{ApprovalStatus, TravelRequest};
