use contracts::shared::metadata::FieldErrors;
use thiserror::Error;

use super::export::ExportError;

/// Ошибки view model дашборда
///
/// Ни одна из них не фатальна: в худшем случае операция становится no-op.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DashboardError {
    /// Ошибки полей формы или фильтра: имя поля -> сообщение
    #[error("Validation failed: {}", format_field_errors(.0))]
    Validation(FieldErrors),

    #[error("{element} '{id}' not found")]
    NotFound { element: &'static str, id: String },

    #[error("{element} '{id}' already exists")]
    DuplicateId { element: &'static str, id: String },

    /// Запись без ID в хранилище без генератора (составной ключ не заполнен)
    #[error("{element} has no identifier")]
    MissingId { element: &'static str },

    #[error(transparent)]
    Export(#[from] ExportError),
}

impl DashboardError {
    /// Ошибка одного поля
    pub fn field(field: &str, message: impl Into<String>) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(field.to_string(), message.into());
        Self::Validation(errors)
    }

    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

fn format_field_errors(errors: &FieldErrors) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("{}: {}", field, message))
        .collect::<Vec<_>>()
        .join("; ")
}

pub type DashboardResult<T> = Result<T, DashboardError>;
