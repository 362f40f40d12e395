//! Validation rules for metadata fields

use std::collections::BTreeMap;

use super::field_type::FieldType;
use crate::domain::common::{FieldAccess, Record};
use crate::shared::date::parse_iso_date;

/// Ошибки валидации по полям: имя поля -> сообщение
pub type FieldErrors = BTreeMap<String, String>;

/// Validation rules for a field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        Self {
            required: true,
            ..Self::none()
        }
    }

    /// Required money/quantity field: value must be >= 0
    pub const fn non_negative() -> Self {
        Self {
            min: Some(0.0),
            ..Self::required()
        }
    }

    pub const fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Check if field is required
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Validate a string value against the rules
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        if self.required && value.trim().is_empty() {
            return Err(format!("{} is required", field_label));
        }

        let length = value.chars().count();
        if let Some(min) = self.min_length {
            if length < min {
                return Err(format!("{} must be at least {} characters", field_label, min));
            }
        }

        if let Some(max) = self.max_length {
            if length > max {
                return Err(format!("{} must not exceed {} characters", field_label, max));
            }
        }

        Ok(())
    }

    /// Validate a numeric value against min/max rules
    pub fn validate_number(&self, value: f64, field_label: &str) -> Result<(), String> {
        if let Some(min) = self.min {
            if value < min {
                if min == 0.0 {
                    return Err(format!("{} cannot be negative", field_label));
                }
                return Err(format!("{} must be at least {}", field_label, min));
            }
        }

        if let Some(max) = self.max {
            if value > max {
                return Err(format!("{} must not exceed {}", field_label, max));
            }
        }

        Ok(())
    }
}

/// Проверяет запись по метаданным её полей
///
/// Все ошибки собираются сразу, по одной на поле, чтобы форма могла
/// показать их рядом с соответствующими контролами.
pub fn validate_record<R>(record: &R) -> Result<(), FieldErrors>
where
    R: Record + FieldAccess,
{
    let mut errors = FieldErrors::new();

    for field in R::field_metadata() {
        let value = record.get_field_value(field.name).unwrap_or_default();
        if let Err(e) = validate_field(field.field_type, &field.validation, &value, field.label) {
            errors.insert(field.name.to_string(), e);
            continue;
        }
        if field.field_type == FieldType::Enum && !value.trim().is_empty() {
            if let Some(allowed) = field.enum_values {
                if !allowed.iter().any(|v| *v == value) {
                    errors.insert(
                        field.name.to_string(),
                        format!("{} must be one of: {}", field.label, allowed.join(", ")),
                    );
                }
            }
        }
    }

    for range in R::date_ranges() {
        // Поле с собственной ошибкой уже отмечено
        if errors.contains_key(range.start) || errors.contains_key(range.end) {
            continue;
        }
        let start = record.get_field_value(range.start).unwrap_or_default();
        let end = record.get_field_value(range.end).unwrap_or_default();
        if start.trim().is_empty() || end.trim().is_empty() {
            continue;
        }
        if let (Ok(start_date), Ok(end_date)) = (parse_iso_date(&start), parse_iso_date(&end)) {
            if end_date < start_date {
                errors.insert(
                    range.end.to_string(),
                    format!(
                        "{} cannot be before {}",
                        R::field_label(range.end),
                        R::field_label(range.start)
                    ),
                );
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_field(
    field_type: FieldType,
    rules: &ValidationRules,
    value: &str,
    label: &str,
) -> Result<(), String> {
    rules.validate_string(value, label)?;
    if value.trim().is_empty() {
        return Ok(());
    }
    match field_type {
        FieldType::Number => {
            let number = value
                .trim()
                .parse::<f64>()
                .map_err(|_| format!("{} must be a number", label))?;
            rules.validate_number(number, label)
        }
        FieldType::Date => parse_iso_date(value)
            .map(|_| ())
            .map_err(|_| format!("{} must be a valid date (yyyy-mm-dd)", label)),
        FieldType::Text | FieldType::Enum | FieldType::Attachment => Ok(()),
    }
}
