use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::common::field_access::unknown_field;
use crate::domain::common::{Attachment, FieldAccess, Record};
use crate::shared::metadata::{FieldMetadata, ValidationRules};

// ============================================================================
// Enums
// ============================================================================

/// Направление QHSE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum IncidentCategory {
    Quality,
    Health,
    #[default]
    Safety,
    Environment,
}

impl IncidentCategory {
    pub const VALUES: &'static [&'static str] = &["Quality", "Health", "Safety", "Environment"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Quality => "Quality",
            Self::Health => "Health",
            Self::Safety => "Safety",
            Self::Environment => "Environment",
        }
    }

    pub fn all() -> Vec<IncidentCategory> {
        vec![Self::Quality, Self::Health, Self::Safety, Self::Environment]
    }
}

impl FromStr for IncidentCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown incident category: {}", s))
    }
}

impl std::fmt::Display for IncidentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Тяжесть происшествия
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Severity {
    #[default]
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub const VALUES: &'static [&'static str] = &["Low", "Medium", "High", "Critical"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }

    pub fn all() -> Vec<Severity> {
        vec![Self::Low, Self::Medium, Self::High, Self::Critical]
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown severity: {}", s))
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Статус расследования
///
/// Переходы между статусами не ограничены: любой статус может смениться
/// на любой другой.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum IncidentStatus {
    #[default]
    Open,
    Investigating,
    Closed,
}

impl IncidentStatus {
    pub const VALUES: &'static [&'static str] = &["Open", "Investigating", "Closed"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Investigating => "Investigating",
            Self::Closed => "Closed",
        }
    }

    pub fn all() -> Vec<IncidentStatus> {
        vec![Self::Open, Self::Investigating, Self::Closed]
    }
}

impl FromStr for IncidentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown incident status: {}", s))
    }
}

impl std::fmt::Display for IncidentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Record
// ============================================================================

/// Происшествие QHSE (качество, здоровье, безопасность, экология)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QhseIncident {
    /// ID вида "INC-000001", присваивается хранилищем
    pub id: Option<String>,
    #[serde(rename = "reportedOn")]
    pub reported_on: String,
    pub title: String,
    pub location: String,
    pub category: IncidentCategory,
    pub severity: Severity,
    pub status: IncidentStatus,
    pub reporter: String,
    #[serde(default)]
    pub attachment: Attachment,
}

impl QhseIncident {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        reported_on: &str,
        title: &str,
        location: &str,
        category: IncidentCategory,
        severity: Severity,
        status: IncidentStatus,
        reporter: &str,
    ) -> Self {
        Self {
            id: None,
            reported_on: reported_on.into(),
            title: title.into(),
            location: location.into(),
            category,
            severity,
            status,
            reporter: reporter.into(),
            attachment: Attachment::default(),
        }
    }

    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachment = attachment;
        self
    }
}

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::date("reported_on", "Reported on").with_rules(ValidationRules::required()),
    FieldMetadata::text("title", "Title").with_rules(ValidationRules::required().with_max_length(150)),
    FieldMetadata::text("location", "Location").with_rules(ValidationRules::required()),
    FieldMetadata::enumeration("category", "Category", IncidentCategory::VALUES),
    FieldMetadata::enumeration("severity", "Severity", Severity::VALUES),
    FieldMetadata::enumeration("status", "Status", IncidentStatus::VALUES),
    FieldMetadata::text("reporter", "Reported by").with_rules(ValidationRules::required()),
    FieldMetadata::attachment("attachment_name", "Evidence file"),
    FieldMetadata::attachment("attachment_url", "Evidence URL"),
];

impl Record for QhseIncident {
    type Id = String;

    fn id(&self) -> Option<Self::Id> {
        self.id.clone()
    }

    fn assign_id(&mut self, id: Self::Id) {
        self.id = Some(id);
    }

    fn title(&self) -> String {
        self.title.clone()
    }

    fn record_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "qhse_incident"
    }

    fn element_name() -> &'static str {
        "Incident"
    }

    fn list_name() -> &'static str {
        "QHSE incidents"
    }

    fn field_metadata() -> &'static [FieldMetadata] {
        FIELDS
    }
}

impl FieldAccess for QhseIncident {
    fn get_field_value(&self, field: &str) -> Option<String> {
        match field {
            "id" => self.id.clone(),
            "reported_on" => Some(self.reported_on.clone()),
            "title" => Some(self.title.clone()),
            "location" => Some(self.location.clone()),
            "category" => Some(self.category.to_string()),
            "severity" => Some(self.severity.to_string()),
            "status" => Some(self.status.to_string()),
            "reporter" => Some(self.reporter.clone()),
            "attachment_name" => Some(self.attachment.file_name.clone()),
            "attachment_url" => Some(self.attachment.url.clone()),
            _ => None,
        }
    }

    fn set_field_value(&mut self, field: &str, value: &str) -> Result<(), String> {
        match field {
            "reported_on" => self.reported_on = value.trim().to_string(),
            "title" => self.title = value.to_string(),
            "location" => self.location = value.to_string(),
            "category" => self.category = value.parse()?,
            "severity" => self.severity = value.parse()?,
            "status" => self.status = value.parse()?,
            "reporter" => self.reporter = value.to_string(),
            "attachment_name" => self.attachment.file_name = value.to_string(),
            "attachment_url" => self.attachment.url = value.to_string(),
            _ => return Err(unknown_field(field)),
        }
        Ok(())
    }
}
