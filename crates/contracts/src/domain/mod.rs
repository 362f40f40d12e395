pub mod common;

pub mod a001_finance_transaction;
pub mod a002_inventory_item;
pub mod a003_qhse_incident;
pub mod a004_travel_request;
pub mod a005_asset;
