pub mod config;
pub mod error;
pub mod export;
pub mod format;
pub mod list;
pub mod modal;
pub mod notice;
pub mod schema;
pub mod state;
pub mod view_model;
