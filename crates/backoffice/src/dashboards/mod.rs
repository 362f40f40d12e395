//! Дашборды back-office: схема + демонстрационные данные для каждой области

pub mod d401_finance;
pub mod d402_warehouse;
pub mod d403_qhse;
pub mod d404_travel_requests;
pub mod d405_assets;

pub use d401_finance::FinanceDashboard;
pub use d402_warehouse::WarehouseDashboard;
pub use d403_qhse::QhseDashboard;
pub use d404_travel_requests::TravelRequestsDashboard;
pub use d405_assets::AssetsDashboard;
