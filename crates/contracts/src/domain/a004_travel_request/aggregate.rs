use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::common::field_access::{parse_number, unknown_field};
use crate::domain::common::{Attachment, FieldAccess, Record};
use crate::shared::metadata::{DateRangeRule, FieldMetadata, ValidationRules};

// ============================================================================
// Enums
// ============================================================================

/// Статус согласования заявки
///
/// Таблица переходов не задана: Rejected может снова стать Pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ApprovalStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    pub const VALUES: &'static [&'static str] = &["Pending", "Approved", "Rejected"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }

    pub fn all() -> Vec<ApprovalStatus> {
        vec![Self::Pending, Self::Approved, Self::Rejected]
    }
}

impl FromStr for ApprovalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown approval status: {}", s))
    }
}

impl std::fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Record
// ============================================================================

/// Заявка на командировку (HR)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TravelRequest {
    /// ID вида "TRV-000001", присваивается хранилищем
    pub id: Option<String>,
    pub employee: String,
    pub department: String,
    pub destination: String,
    pub purpose: String,
    #[serde(rename = "departureDate")]
    pub departure_date: String,
    #[serde(rename = "returnDate")]
    pub return_date: String,
    #[serde(rename = "estimatedCost")]
    pub estimated_cost: f64,
    pub status: ApprovalStatus,
    #[serde(default)]
    pub attachment: Attachment,
}

impl TravelRequest {
    pub fn new(
        employee: &str,
        department: &str,
        destination: &str,
        purpose: &str,
        departure_date: &str,
        return_date: &str,
        estimated_cost: f64,
    ) -> Self {
        Self {
            id: None,
            employee: employee.into(),
            department: department.into(),
            destination: destination.into(),
            purpose: purpose.into(),
            departure_date: departure_date.into(),
            return_date: return_date.into(),
            estimated_cost,
            status: ApprovalStatus::Pending,
            attachment: Attachment::default(),
        }
    }

    pub fn with_status(mut self, status: ApprovalStatus) -> Self {
        self.status = status;
        self
    }
}

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::text("employee", "Employee").with_rules(ValidationRules::required()),
    FieldMetadata::text("department", "Department").with_rules(ValidationRules::required()),
    FieldMetadata::text("destination", "Destination").with_rules(ValidationRules::required()),
    FieldMetadata::text("purpose", "Purpose")
        .with_rules(ValidationRules::required().with_max_length(500))
        .hidden_in_list(),
    FieldMetadata::date("departure_date", "Departure date").with_rules(ValidationRules::required()),
    FieldMetadata::date("return_date", "Return date").with_rules(ValidationRules::required()),
    FieldMetadata::number("estimated_cost", "Estimated cost")
        .with_rules(ValidationRules::non_negative()),
    FieldMetadata::enumeration("status", "Status", ApprovalStatus::VALUES),
    FieldMetadata::attachment("attachment_name", "Supporting document"),
    FieldMetadata::attachment("attachment_url", "Supporting document URL"),
];

const DATE_RANGES: &[DateRangeRule] = &[DateRangeRule {
    start: "departure_date",
    end: "return_date",
}];

impl Record for TravelRequest {
    type Id = String;

    fn id(&self) -> Option<Self::Id> {
        self.id.clone()
    }

    fn assign_id(&mut self, id: Self::Id) {
        self.id = Some(id);
    }

    fn title(&self) -> String {
        format!("{} → {}", self.employee, self.destination)
    }

    fn record_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "travel_request"
    }

    fn element_name() -> &'static str {
        "Travel request"
    }

    fn list_name() -> &'static str {
        "Travel requests"
    }

    fn field_metadata() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn date_ranges() -> &'static [DateRangeRule] {
        DATE_RANGES
    }
}

impl FieldAccess for TravelRequest {
    fn get_field_value(&self, field: &str) -> Option<String> {
        match field {
            "id" => self.id.clone(),
            "employee" => Some(self.employee.clone()),
            "department" => Some(self.department.clone()),
            "destination" => Some(self.destination.clone()),
            "purpose" => Some(self.purpose.clone()),
            "departure_date" => Some(self.departure_date.clone()),
            "return_date" => Some(self.return_date.clone()),
            "estimated_cost" => Some(self.estimated_cost.to_string()),
            "status" => Some(self.status.to_string()),
            "attachment_name" => Some(self.attachment.file_name.clone()),
            "attachment_url" => Some(self.attachment.url.clone()),
            _ => None,
        }
    }

    fn set_field_value(&mut self, field: &str, value: &str) -> Result<(), String> {
        match field {
            "employee" => self.employee = value.to_string(),
            "department" => self.department = value.to_string(),
            "destination" => self.destination = value.to_string(),
            "purpose" => self.purpose = value.to_string(),
            "departure_date" => self.departure_date = value.trim().to_string(),
            "return_date" => self.return_date = value.trim().to_string(),
            "estimated_cost" => self.estimated_cost = parse_number(value, "Estimated cost")?,
            "status" => self.status = value.parse()?,
            "attachment_name" => self.attachment.file_name = value.to_string(),
            "attachment_url" => self.attachment.url = value.to_string(),
            _ => return Err(unknown_field(field)),
        }
        Ok(())
    }
}
