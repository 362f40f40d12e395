//! Field-level metadata types
//!
//! All types use 'static lifetimes for zero-cost compile-time constants.

use super::field_type::FieldType;
use super::validation::ValidationRules;

/// Metadata for a single field
/// Copy trait enabled for efficient passing by value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldMetadata {
    pub name: &'static str,
    pub label: &'static str,
    pub field_type: FieldType,
    pub validation: ValidationRules,
    pub enum_values: Option<&'static [&'static str]>,
    pub visible_in_list: bool,
}

impl FieldMetadata {
    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            field_type: FieldType::Text,
            validation: ValidationRules::none(),
            enum_values: None,
            visible_in_list: true,
        }
    }

    pub const fn number(name: &'static str, label: &'static str) -> Self {
        Self {
            field_type: FieldType::Number,
            ..Self::text(name, label)
        }
    }

    pub const fn date(name: &'static str, label: &'static str) -> Self {
        Self {
            field_type: FieldType::Date,
            ..Self::text(name, label)
        }
    }

    pub const fn enumeration(
        name: &'static str,
        label: &'static str,
        values: &'static [&'static str],
    ) -> Self {
        Self {
            field_type: FieldType::Enum,
            enum_values: Some(values),
            ..Self::text(name, label)
        }
    }

    pub const fn attachment(name: &'static str, label: &'static str) -> Self {
        Self {
            field_type: FieldType::Attachment,
            visible_in_list: false,
            ..Self::text(name, label)
        }
    }

    pub const fn with_rules(mut self, validation: ValidationRules) -> Self {
        self.validation = validation;
        self
    }

    pub const fn hidden_in_list(mut self) -> Self {
        self.visible_in_list = false;
        self
    }

    /// Check if field is optional
    pub fn is_optional(&self) -> bool {
        !self.validation.required
    }
}

/// Пара полей-дат, где окончание не может быть раньше начала
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRangeRule {
    pub start: &'static str,
    pub end: &'static str,
}
