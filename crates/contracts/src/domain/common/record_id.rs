use std::fmt::Debug;
use std::hash::Hash;

/// Трейт для типов идентификаторов записей
///
/// Идентификатор может быть числовым, строковым, UUID или составным ключом
/// из нескольких полей записи.
pub trait RecordId: Clone + PartialEq + Eq + Hash + Debug + 'static {
    /// Преобразовать ID в строку
    fn as_string(&self) -> String;

    /// Создать ID из строки
    fn from_string(s: &str) -> Result<Self, String>;
}

// Реализация для базовых типов

impl RecordId for u64 {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<u64>()
            .map_err(|e| format!("Invalid u64: {}", e))
    }
}

impl RecordId for String {
    fn as_string(&self) -> String {
        self.clone()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty identifier".into());
        }
        Ok(s.to_string())
    }
}

impl RecordId for uuid::Uuid {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s).map_err(|e| format!("Invalid UUID: {}", e))
    }
}
