//! Common types and traits for all dashboard records

pub mod attachment;
pub mod field_access;
pub mod record;
pub mod record_id;

// Re-exports
pub use attachment::Attachment;
pub use field_access::FieldAccess;
pub use record::Record;
pub use record_id::RecordId;
