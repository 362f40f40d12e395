//! Back-office dashboards: универсальная табличная view model
//!
//! Хранилище записей, фильтры, пагинация, модальные формы и экспорт без
//! привязки к UI-фреймворку; слой отображения подключается к
//! `DashboardViewModel`.

pub mod dashboards;
pub mod shared;

pub use shared::config::{load_config, Config};
pub use shared::error::{DashboardError, DashboardResult};
pub use shared::schema::DashboardSchema;
pub use shared::view_model::DashboardViewModel;
