pub mod aggregate;

pub use aggregate::{InventoryItem, InventoryKey, ItemCategory, StockStatus};
