//! Общие типы записей для дашбордов бэк-офиса
//!
//! Крейт не зависит от UI: здесь только формы записей, их идентичность,
//! метаданные полей и правила валидации.

pub mod domain;
pub mod shared;
