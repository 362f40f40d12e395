//! Табличное представление: хранилище, фильтры, пагинация

pub mod filter;
pub mod id_generator;
pub mod paginator;
pub mod store;

pub use filter::{apply_filter, FilterSpec, FilterState};
pub use id_generator::{IdGenerator, PrefixedIds, SequentialIds, UuidIds};
pub use paginator::{paginate, Page};
pub use store::{InsertPosition, RecordStore};
