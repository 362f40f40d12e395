//! Стратегии присвоения ID новым записям
//!
//! ID присваивает только хранилище. Генератор видит все ID начальных данных,
//! поэтому счётчик стартует после них.

use contracts::domain::common::RecordId;
use uuid::Uuid;

/// Генератор ID для хранилища записей
pub trait IdGenerator<Id: RecordId> {
    /// Следующий ID
    fn next_id(&mut self) -> Id;

    /// Учесть существующий ID (из начальных данных или вставленный вручную)
    fn observe(&mut self, _id: &Id) {}
}

/// Монотонный числовой счётчик: 1, 2, 3...
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    last: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_after(last: u64) -> Self {
        Self { last }
    }
}

impl IdGenerator<u64> for SequentialIds {
    fn next_id(&mut self) -> u64 {
        self.last += 1;
        self.last
    }

    fn observe(&mut self, id: &u64) {
        self.last = self.last.max(*id);
    }
}

/// Счётчик с префиксом: "TRV-000001", "INC-000042"
#[derive(Debug, Clone)]
pub struct PrefixedIds {
    prefix: String,
    width: usize,
    last: u64,
}

impl PrefixedIds {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            width: 6,
            last: 0,
        }
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    fn format(&self, n: u64) -> String {
        format!("{}-{:0width$}", self.prefix, n, width = self.width)
    }

    fn parse(&self, id: &str) -> Option<u64> {
        id.strip_prefix(&self.prefix)?
            .strip_prefix('-')?
            .parse::<u64>()
            .ok()
    }
}

impl IdGenerator<String> for PrefixedIds {
    fn next_id(&mut self) -> String {
        self.last += 1;
        self.format(self.last)
    }

    fn observe(&mut self, id: &String) {
        if let Some(n) = self.parse(id) {
            self.last = self.last.max(n);
        }
    }
}

/// Случайные UUID v4
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator<Uuid> for UuidIds {
    fn next_id(&mut self) -> Uuid {
        Uuid::new_v4()
    }
}
