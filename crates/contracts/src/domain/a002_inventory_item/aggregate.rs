use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::common::field_access::{parse_integer, parse_number, unknown_field};
use crate::domain::common::{FieldAccess, Record, RecordId};
use crate::shared::metadata::{FieldMetadata, ValidationRules};

// ============================================================================
// ID Type
// ============================================================================

/// Составной ключ складской позиции: склад + артикул
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InventoryKey {
    pub warehouse: String,
    pub sku: String,
}

impl InventoryKey {
    pub fn new(warehouse: &str, sku: &str) -> Self {
        Self {
            warehouse: warehouse.trim().to_string(),
            sku: sku.trim().to_string(),
        }
    }
}

impl RecordId for InventoryKey {
    fn as_string(&self) -> String {
        format!("{}/{}", self.warehouse, self.sku)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        match s.split_once('/') {
            Some((warehouse, sku)) if !warehouse.trim().is_empty() && !sku.trim().is_empty() => {
                Ok(Self::new(warehouse, sku))
            }
            _ => Err(format!("Invalid inventory key '{}', expected WAREHOUSE/SKU", s)),
        }
    }
}

// ============================================================================
// Enums
// ============================================================================

/// Категория складской позиции
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ItemCategory {
    #[default]
    RawMaterial,
    Component,
    FinishedGood,
    Consumable,
}

impl ItemCategory {
    pub const VALUES: &'static [&'static str] =
        &["RawMaterial", "Component", "FinishedGood", "Consumable"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RawMaterial => "RawMaterial",
            Self::Component => "Component",
            Self::FinishedGood => "FinishedGood",
            Self::Consumable => "Consumable",
        }
    }

    pub fn all() -> Vec<ItemCategory> {
        vec![
            Self::RawMaterial,
            Self::Component,
            Self::FinishedGood,
            Self::Consumable,
        ]
    }
}

impl FromStr for ItemCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown item category: {}", s))
    }
}

impl std::fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Состояние остатка
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StockStatus {
    #[default]
    InStock,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    pub const VALUES: &'static [&'static str] = &["InStock", "LowStock", "OutOfStock"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InStock => "InStock",
            Self::LowStock => "LowStock",
            Self::OutOfStock => "OutOfStock",
        }
    }

    pub fn all() -> Vec<StockStatus> {
        vec![Self::InStock, Self::LowStock, Self::OutOfStock]
    }
}

impl FromStr for StockStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown stock status: {}", s))
    }
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Record
// ============================================================================

/// Складская позиция
///
/// Идентичность задаётся парой (склад, артикул); отдельного ID нет.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub warehouse: String,
    pub sku: String,
    pub name: String,
    pub category: ItemCategory,
    pub quantity: i64,
    pub unit: String,
    #[serde(rename = "unitPrice")]
    pub unit_price: f64,
    /// Дата последнего поступления, ISO yyyy-mm-dd
    #[serde(rename = "lastReceived")]
    pub last_received: String,
    pub status: StockStatus,
}

impl InventoryItem {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        warehouse: &str,
        sku: &str,
        name: &str,
        category: ItemCategory,
        quantity: i64,
        unit: &str,
        unit_price: f64,
        last_received: &str,
    ) -> Self {
        Self {
            warehouse: warehouse.into(),
            sku: sku.into(),
            name: name.into(),
            category,
            quantity,
            unit: unit.into(),
            unit_price,
            last_received: last_received.into(),
            status: StockStatus::for_quantity(quantity),
        }
    }

    /// Стоимость остатка
    pub fn stock_value(&self) -> f64 {
        self.quantity as f64 * self.unit_price
    }
}

impl StockStatus {
    /// Статус по умолчанию для количества (порог «мало»: 10 единиц)
    pub fn for_quantity(quantity: i64) -> Self {
        match quantity {
            q if q <= 0 => Self::OutOfStock,
            q if q < 10 => Self::LowStock,
            _ => Self::InStock,
        }
    }
}

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::text("warehouse", "Warehouse").with_rules(ValidationRules::required()),
    FieldMetadata::text("sku", "SKU").with_rules(ValidationRules::required().with_max_length(32)),
    FieldMetadata::text("name", "Item name").with_rules(ValidationRules::required()),
    FieldMetadata::enumeration("category", "Category", ItemCategory::VALUES),
    FieldMetadata::number("quantity", "Quantity").with_rules(ValidationRules::non_negative()),
    FieldMetadata::text("unit", "Unit"),
    FieldMetadata::number("unit_price", "Unit price").with_rules(ValidationRules::non_negative()),
    FieldMetadata::date("last_received", "Last received"),
    FieldMetadata::enumeration("status", "Stock status", StockStatus::VALUES),
];

impl Record for InventoryItem {
    type Id = InventoryKey;

    fn id(&self) -> Option<Self::Id> {
        if self.warehouse.trim().is_empty() || self.sku.trim().is_empty() {
            return None;
        }
        Some(InventoryKey::new(&self.warehouse, &self.sku))
    }

    fn assign_id(&mut self, id: Self::Id) {
        self.warehouse = id.warehouse;
        self.sku = id.sku;
    }

    fn title(&self) -> String {
        format!("{} ({})", self.name, self.sku)
    }

    fn record_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "inventory_item"
    }

    fn element_name() -> &'static str {
        "Inventory item"
    }

    fn list_name() -> &'static str {
        "Warehouse stock"
    }

    fn field_metadata() -> &'static [FieldMetadata] {
        FIELDS
    }
}

impl FieldAccess for InventoryItem {
    fn get_field_value(&self, field: &str) -> Option<String> {
        match field {
            "warehouse" => Some(self.warehouse.clone()),
            "sku" => Some(self.sku.clone()),
            "name" => Some(self.name.clone()),
            "category" => Some(self.category.to_string()),
            "quantity" => Some(self.quantity.to_string()),
            "unit" => Some(self.unit.clone()),
            "unit_price" => Some(self.unit_price.to_string()),
            "last_received" => Some(self.last_received.clone()),
            "status" => Some(self.status.to_string()),
            _ => None,
        }
    }

    fn set_field_value(&mut self, field: &str, value: &str) -> Result<(), String> {
        match field {
            "warehouse" => self.warehouse = value.trim().to_string(),
            "sku" => self.sku = value.trim().to_string(),
            "name" => self.name = value.to_string(),
            "category" => self.category = value.parse()?,
            // Статус пересчитывается от количества; выбранный после этого статус не трогаем
            "quantity" => {
                self.quantity = parse_integer(value, "Quantity")?;
                self.status = StockStatus::for_quantity(self.quantity);
            }
            "unit" => self.unit = value.to_string(),
            "unit_price" => self.unit_price = parse_number(value, "Unit price")?,
            "last_received" => self.last_received = value.trim().to_string(),
            "status" => self.status = value.parse()?,
            _ => return Err(unknown_field(field)),
        }
        Ok(())
    }
}
