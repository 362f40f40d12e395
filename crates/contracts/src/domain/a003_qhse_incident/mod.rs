pub mod aggregate;

pub use aggregate::{IncidentCategory, IncidentStatus, QhseIncident, Severity};
