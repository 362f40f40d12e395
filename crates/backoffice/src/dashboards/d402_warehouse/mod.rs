//! d402 Warehouse: складские остатки
//!
//! Позиция определяется парой склад + артикул, поэтому генератора ID нет.

mod fixtures;

use contracts::domain::a002_inventory_item::{InventoryItem, InventoryKey};

use crate::shared::list::{FilterSpec, IdGenerator};
use crate::shared::schema::DashboardSchema;

pub use fixtures::sample_stock;

pub struct WarehouseDashboard;

impl DashboardSchema for WarehouseDashboard {
    type Record = InventoryItem;

    fn key() -> &'static str {
        "d402_warehouse"
    }

    fn title() -> &'static str {
        "Warehouse stock"
    }

    fn filter_spec() -> FilterSpec {
        FilterSpec {
            search_fields: &["name", "sku", "warehouse"],
            category_field: Some("status"),
            date_field: Some("last_received"),
        }
    }

    fn id_generator() -> Option<Box<dyn IdGenerator<InventoryKey>>> {
        None
    }

    fn sample_data() -> Vec<InventoryItem> {
        sample_stock()
    }
}
