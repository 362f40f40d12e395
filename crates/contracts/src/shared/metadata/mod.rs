//! Metadata types for describing record fields
//!
//! Every record shape declares its fields as compile-time constants.
//! The form editor validates drafts against them, the list view uses labels
//! and visibility flags.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contracts::domain::common::Record;
//!
//! for field in TravelRequest::field_metadata() {
//!     if field.validation.required {
//!         println!("Required: {}", field.label);
//!     }
//! }
//! ```

mod field_type;
mod types;
mod validation;

pub use field_type::FieldType;
pub use types::{DateRangeRule, FieldMetadata};
pub use validation::{validate_record, FieldErrors, ValidationRules};
