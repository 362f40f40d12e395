pub mod date;
pub mod metadata;
