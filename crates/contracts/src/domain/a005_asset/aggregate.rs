use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::common::field_access::{parse_number, unknown_field};
use crate::domain::common::{FieldAccess, Record};
use crate::shared::metadata::{FieldMetadata, ValidationRules};

// ============================================================================
// Enums
// ============================================================================

/// Категория основного средства
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AssetCategory {
    #[default]
    It,
    Vehicle,
    Furniture,
    Machinery,
}

impl AssetCategory {
    pub const VALUES: &'static [&'static str] = &["It", "Vehicle", "Furniture", "Machinery"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::It => "It",
            Self::Vehicle => "Vehicle",
            Self::Furniture => "Furniture",
            Self::Machinery => "Machinery",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::It => "IT equipment",
            Self::Vehicle => "Vehicle",
            Self::Furniture => "Furniture",
            Self::Machinery => "Machinery",
        }
    }

    pub fn all() -> Vec<AssetCategory> {
        vec![Self::It, Self::Vehicle, Self::Furniture, Self::Machinery]
    }
}

impl FromStr for AssetCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown asset category: {}", s))
    }
}

impl std::fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Состояние основного средства
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AssetStatus {
    #[default]
    Active,
    UnderMaintenance,
    Retired,
}

impl AssetStatus {
    pub const VALUES: &'static [&'static str] = &["Active", "UnderMaintenance", "Retired"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::UnderMaintenance => "UnderMaintenance",
            Self::Retired => "Retired",
        }
    }

    pub fn all() -> Vec<AssetStatus> {
        vec![Self::Active, Self::UnderMaintenance, Self::Retired]
    }
}

impl FromStr for AssetStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown asset status: {}", s))
    }
}

impl std::fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Record
// ============================================================================

/// Основное средство
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: Option<Uuid>,
    /// Инвентарный номер, наклеенный на объект
    #[serde(rename = "assetTag")]
    pub asset_tag: String,
    pub name: String,
    pub category: AssetCategory,
    pub location: String,
    #[serde(rename = "purchaseDate")]
    pub purchase_date: String,
    #[serde(rename = "purchaseValue")]
    pub purchase_value: f64,
    pub status: AssetStatus,
}

impl Asset {
    pub fn new(
        asset_tag: &str,
        name: &str,
        category: AssetCategory,
        location: &str,
        purchase_date: &str,
        purchase_value: f64,
    ) -> Self {
        Self {
            id: None,
            asset_tag: asset_tag.into(),
            name: name.into(),
            category,
            location: location.into(),
            purchase_date: purchase_date.into(),
            purchase_value,
            status: AssetStatus::Active,
        }
    }
}

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::text("asset_tag", "Asset tag")
        .with_rules(ValidationRules::required().with_max_length(20)),
    FieldMetadata::text("name", "Name").with_rules(ValidationRules::required()),
    FieldMetadata::enumeration("category", "Category", AssetCategory::VALUES),
    FieldMetadata::text("location", "Location").with_rules(ValidationRules::required()),
    FieldMetadata::date("purchase_date", "Purchase date").with_rules(ValidationRules::required()),
    FieldMetadata::number("purchase_value", "Purchase value")
        .with_rules(ValidationRules::non_negative()),
    FieldMetadata::enumeration("status", "Status", AssetStatus::VALUES),
];

impl Record for Asset {
    type Id = Uuid;

    fn id(&self) -> Option<Self::Id> {
        self.id
    }

    fn assign_id(&mut self, id: Self::Id) {
        self.id = Some(id);
    }

    fn title(&self) -> String {
        format!("{} {}", self.asset_tag, self.name)
    }

    fn record_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "asset"
    }

    fn element_name() -> &'static str {
        "Asset"
    }

    fn list_name() -> &'static str {
        "Assets"
    }

    fn field_metadata() -> &'static [FieldMetadata] {
        FIELDS
    }
}

impl FieldAccess for Asset {
    fn get_field_value(&self, field: &str) -> Option<String> {
        match field {
            "id" => self.id.map(|id| id.to_string()),
            "asset_tag" => Some(self.asset_tag.clone()),
            "name" => Some(self.name.clone()),
            "category" => Some(self.category.to_string()),
            "location" => Some(self.location.clone()),
            "purchase_date" => Some(self.purchase_date.clone()),
            "purchase_value" => Some(self.purchase_value.to_string()),
            "status" => Some(self.status.to_string()),
            _ => None,
        }
    }

    fn set_field_value(&mut self, field: &str, value: &str) -> Result<(), String> {
        match field {
            "asset_tag" => self.asset_tag = value.trim().to_uppercase(),
            "name" => self.name = value.to_string(),
            "category" => self.category = value.parse()?,
            "location" => self.location = value.to_string(),
            "purchase_date" => self.purchase_date = value.trim().to_string(),
            "purchase_value" => self.purchase_value = parse_number(value, "Purchase value")?,
            "status" => self.status = value.parse()?,
            _ => return Err(unknown_field(field)),
        }
        Ok(())
    }
}
