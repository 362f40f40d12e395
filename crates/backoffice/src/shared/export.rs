//! Граница экспорта (Excel/CSV/PDF)
//!
//! Сама генерация файлов здесь не реализована: view model передаёт записи
//! внешнему сериализатору через трейт `Exporter`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Формат экспорта
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Excel,
    Csv,
    Pdf,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Excel => "excel",
            Self::Csv => "csv",
            Self::Pdf => "pdf",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Excel => "xlsx",
            Self::Csv => "csv",
            Self::Pdf => "pdf",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Excel => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            Self::Csv => "text/csv;charset=utf-8;",
            Self::Pdf => "application/pdf",
        }
    }

    pub fn all() -> Vec<ExportFormat> {
        vec![Self::Excel, Self::Csv, Self::Pdf]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "excel" | "xlsx" => Some(Self::Excel),
            "csv" => Some(Self::Csv),
            "pdf" => Some(Self::Pdf),
            _ => None,
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Какие записи экспортировать
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportScope {
    CurrentPage,
    #[default]
    Filtered,
    All,
}

/// Готовый файл от сериализатора
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Ошибки экспорта
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("Export to {0} is not available yet")]
    Unavailable(ExportFormat),

    #[error("Nothing to export")]
    Empty,

    #[error("Export failed: {0}")]
    Failed(String),
}

/// Внешний сериализатор записей
pub trait Exporter<R> {
    fn export(&self, records: &[R], format: ExportFormat) -> Result<ExportArtifact, ExportError>;
}

/// Заглушка: сериализатор ещё не подключён, любой экспорт недоступен
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableExporter;

impl<R> Exporter<R> for UnavailableExporter {
    fn export(&self, _records: &[R], format: ExportFormat) -> Result<ExportArtifact, ExportError> {
        Err(ExportError::Unavailable(format))
    }
}

/// Имя файла для выгрузки: "travel_request_2024-07-01.csv"
pub fn export_file_name(collection: &str, date: chrono::NaiveDate, format: ExportFormat) -> String {
    format!("{}_{}.{}", collection, date.format("%Y-%m-%d"), format.extension())
}

/// Передать записи сериализатору
///
/// Пустой набор отклоняется до вызова сериализатора.
pub fn run_export<R, E>(
    exporter: &E,
    records: &[R],
    format: ExportFormat,
) -> Result<ExportArtifact, ExportError>
where
    E: Exporter<R> + ?Sized,
{
    if records.is_empty() {
        return Err(ExportError::Empty);
    }
    tracing::info!("Export requested: {} records as {}", records.len(), format);
    exporter.export(records, format)
}
