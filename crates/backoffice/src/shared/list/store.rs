//! In-memory хранилище записей одного дашборда
//!
//! Хранилище является единственным владельцем списка. Фильтры и пагинация работают
//! с производными копиями и никогда его не меняют.

use contracts::domain::common::{Record, RecordId};
use serde::{Deserialize, Serialize};

use super::id_generator::IdGenerator;
use crate::shared::error::{DashboardError, DashboardResult};

/// Куда добавляется новая запись
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsertPosition {
    /// Новые записи сверху списка
    #[default]
    Front,
    /// Новые записи в конце списка
    Back,
}

pub struct RecordStore<R: Record> {
    items: Vec<R>,
    ids: Option<Box<dyn IdGenerator<R::Id>>>,
    position: InsertPosition,
}

impl<R: Record> std::fmt::Debug for RecordStore<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordStore")
            .field("collection", &R::collection_name())
            .field("len", &self.items.len())
            .field("position", &self.position)
            .finish()
    }
}

impl<R: Record> RecordStore<R> {
    /// Создать хранилище с начальными данными
    ///
    /// Порядок начальных данных сохраняется. Записям без ID присваивается ID,
    /// повторяющиеся ID в начальных данных дают ошибку.
    pub fn new(
        seed: Vec<R>,
        ids: Option<Box<dyn IdGenerator<R::Id>>>,
        position: InsertPosition,
    ) -> DashboardResult<Self> {
        let mut store = Self {
            items: Vec::with_capacity(seed.len()),
            ids,
            position,
        };

        if let Some(generator) = store.ids.as_mut() {
            for id in seed.iter().filter_map(|r| r.id()) {
                generator.observe(&id);
            }
        }

        for mut record in seed {
            let id = match record.id() {
                Some(id) => id,
                None => {
                    let id = store.generate_id()?;
                    record.assign_id(id.clone());
                    id
                }
            };
            if store.contains(&id) {
                return Err(duplicate::<R>(&id));
            }
            store.items.push(record);
        }

        tracing::debug!(
            "{}: store seeded with {} records",
            R::full_name(),
            store.items.len()
        );
        Ok(store)
    }

    /// Хранилище для записей с составным ключом (без генератора ID)
    pub fn keyed(seed: Vec<R>, position: InsertPosition) -> DashboardResult<Self> {
        Self::new(seed, None, position)
    }

    /// Полный список без фильтров, в порядке хранения
    pub fn list(&self) -> &[R] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn position(&self) -> InsertPosition {
        self.position
    }

    pub fn get(&self, id: &R::Id) -> Option<&R> {
        self.index_of(id).map(|idx| &self.items[idx])
    }

    pub fn contains(&self, id: &R::Id) -> bool {
        self.index_of(id).is_some()
    }

    /// Добавить запись
    ///
    /// Если ID не задан, он генерируется; при совпадении с существующим ID
    /// генерируется ещё раз, а вторая коллизия возвращает `DuplicateId`.
    /// Заданный вручную ID (например, составной ключ) не перегенерируется.
    pub fn insert(&mut self, mut record: R) -> DashboardResult<R> {
        match record.id() {
            Some(id) => {
                if self.contains(&id) {
                    tracing::warn!("{}: duplicate id {}", R::full_name(), id.as_string());
                    return Err(duplicate::<R>(&id));
                }
                if let Some(generator) = self.ids.as_mut() {
                    generator.observe(&id);
                }
            }
            None => {
                let id = self.fresh_id()?;
                record.assign_id(id);
            }
        }

        match self.position {
            InsertPosition::Front => self.items.insert(0, record.clone()),
            InsertPosition::Back => self.items.push(record.clone()),
        }

        tracing::info!(
            "{}: inserted {}",
            R::full_name(),
            record.id().map(|id| id.as_string()).unwrap_or_default()
        );
        Ok(record)
    }

    /// Изменить запись по ID
    ///
    /// Patch применяется к копии; изменённая запись сохраняет позицию.
    /// Если patch меняет составной ключ на ключ другой записи, возвращается `DuplicateId`.
    pub fn update<F>(&mut self, id: &R::Id, patch: F) -> DashboardResult<R>
    where
        F: FnOnce(&mut R),
    {
        let idx = self.index_of(id).ok_or_else(|| not_found::<R>(id))?;

        let mut updated = self.items[idx].clone();
        patch(&mut updated);

        match updated.id() {
            Some(new_id) if new_id != *id => {
                if self.contains(&new_id) {
                    tracing::warn!(
                        "{}: update of {} collides with {}",
                        R::full_name(),
                        id.as_string(),
                        new_id.as_string()
                    );
                    return Err(duplicate::<R>(&new_id));
                }
            }
            Some(_) => {}
            // Patch не может стереть идентичность записи
            None => updated.assign_id(id.clone()),
        }

        self.items[idx] = updated.clone();
        tracing::info!("{}: updated {}", R::full_name(), id.as_string());
        Ok(updated)
    }

    /// Удалить запись по ID; отсутствующий ID игнорируется
    pub fn remove(&mut self, id: &R::Id) -> Option<R> {
        let idx = self.index_of(id)?;
        let removed = self.items.remove(idx);
        tracing::info!("{}: removed {}", R::full_name(), id.as_string());
        Some(removed)
    }

    fn index_of(&self, id: &R::Id) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.id().as_ref() == Some(id))
    }

    fn generate_id(&mut self) -> DashboardResult<R::Id> {
        self.ids
            .as_mut()
            .map(|generator| generator.next_id())
            .ok_or(DashboardError::MissingId {
                element: R::element_name(),
            })
    }

    /// Новый ID с одной повторной попыткой при коллизии
    fn fresh_id(&mut self) -> DashboardResult<R::Id> {
        let first = self.generate_id()?;
        if !self.contains(&first) {
            return Ok(first);
        }
        tracing::warn!(
            "{}: generated id {} already taken, retrying",
            R::full_name(),
            first.as_string()
        );
        let second = self.generate_id()?;
        if self.contains(&second) {
            return Err(duplicate::<R>(&second));
        }
        Ok(second)
    }
}

fn not_found<R: Record>(id: &R::Id) -> DashboardError {
    DashboardError::NotFound {
        element: R::element_name(),
        id: id.as_string(),
    }
}

fn duplicate<R: Record>(id: &R::Id) -> DashboardError {
    DashboardError::DuplicateId {
        element: R::element_name(),
        id: id.as_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::id_generator::{PrefixedIds, SequentialIds};
    use contracts::domain::a001_finance_transaction::{
        FinanceTransaction, PaymentStatus, TransactionCategory,
    };
    use contracts::domain::a002_inventory_item::{InventoryItem, InventoryKey, ItemCategory};
    use contracts::domain::a004_travel_request::TravelRequest;

    fn tx(description: &str, amount: f64) -> FinanceTransaction {
        FinanceTransaction::new(
            "2024-05-01",
            description,
            "BCA 1234",
            TransactionCategory::Expense,
            amount,
            PaymentStatus::Pending,
        )
    }

    fn finance_store(seed: Vec<FinanceTransaction>) -> RecordStore<FinanceTransaction> {
        RecordStore::new(seed, Some(Box::new(SequentialIds::new())), InsertPosition::Front)
            .unwrap()
    }

    /// Генератор, который всегда выдаёт одни и те же ID
    struct Stuck(Vec<u64>);

    impl IdGenerator<u64> for Stuck {
        fn next_id(&mut self) -> u64 {
            if self.0.len() > 1 {
                self.0.remove(0)
            } else {
                self.0[0]
            }
        }
    }

    #[test]
    fn test_seed_without_ids_gets_sequential_ids() {
        let store = finance_store(vec![tx("a", 1.0), tx("b", 2.0)]);
        let ids: Vec<_> = store.list().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![Some(1), Some(2)]);
    }

    #[test]
    fn test_duplicate_seed_ids_are_rejected() {
        let mut a = tx("a", 1.0);
        a.id = Some(5);
        let seed = vec![a.clone(), a];
        let err = RecordStore::new(seed, Some(Box::new(SequentialIds::new())), InsertPosition::Back)
            .unwrap_err();
        assert!(matches!(err, DashboardError::DuplicateId { .. }));
    }

    #[test]
    fn test_insert_then_find() {
        let mut store = finance_store(vec![tx("a", 1.0), tx("b", 2.0)]);
        let before: Vec<_> = store.list().to_vec();

        let stored = store.insert(tx("c", 3.0)).unwrap();
        assert_eq!(stored.id, Some(3));
        assert_eq!(store.list()[0], stored);
        assert_eq!(
            store.list().iter().filter(|r| **r == stored).count(),
            1
        );
        assert_eq!(&store.list()[1..], before.as_slice());
    }

    #[test]
    fn test_insert_back_appends() {
        let mut store: RecordStore<TravelRequest> = RecordStore::new(
            vec![],
            Some(Box::new(PrefixedIds::new("TRV"))),
            InsertPosition::Back,
        )
        .unwrap();
        store.insert(TravelRequest::default()).unwrap();
        store.insert(TravelRequest::default()).unwrap();
        let ids: Vec<_> = store.list().iter().filter_map(|r| r.id.clone()).collect();
        assert_eq!(ids, vec!["TRV-000001", "TRV-000002"]);
    }

    #[test]
    fn test_generated_collision_retries_once() {
        let mut taken = tx("taken", 1.0);
        taken.id = Some(7);
        let mut store =
            RecordStore::new(vec![taken], Some(Box::new(Stuck(vec![7, 8]))), InsertPosition::Back)
                .unwrap();
        let stored = store.insert(tx("new", 2.0)).unwrap();
        assert_eq!(stored.id, Some(8));
    }

    #[test]
    fn test_second_collision_fails_without_overwrite() {
        let mut taken = tx("taken", 1.0);
        taken.id = Some(7);
        let mut store =
            RecordStore::new(vec![taken.clone()], Some(Box::new(Stuck(vec![7]))), InsertPosition::Back)
                .unwrap();
        let err = store.insert(tx("new", 2.0)).unwrap_err();
        assert_eq!(
            err,
            DashboardError::DuplicateId {
                element: "Transaction",
                id: "7".into()
            }
        );
        assert_eq!(store.list(), &[taken]);
    }

    #[test]
    fn test_update_then_read() {
        let mut store = finance_store(vec![tx("a", 1.0), tx("b", 2.0)]);
        let updated = store
            .update(&2, |r| {
                r.amount = 99.0;
                r.status = PaymentStatus::Paid;
            })
            .unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(&2), Some(&updated));
        assert_eq!(updated.amount, 99.0);
        assert_eq!(updated.status, PaymentStatus::Paid);
    }

    #[test]
    fn test_update_keeps_identity() {
        let mut store = finance_store(vec![tx("a", 1.0)]);
        let updated = store.update(&1, |r| r.id = None).unwrap();
        assert_eq!(updated.id, Some(1));
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let mut store = finance_store(vec![tx("a", 1.0)]);
        let err = store.update(&42, |r| r.amount = 0.0).unwrap_err();
        assert!(matches!(err, DashboardError::NotFound { .. }));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut store = finance_store(vec![tx("a", 1.0), tx("b", 2.0)]);
        assert!(store.remove(&1).is_some());
        assert!(store.remove(&1).is_none());
        assert_eq!(store.len(), 1);
    }

    fn item(warehouse: &str, sku: &str) -> InventoryItem {
        InventoryItem::new(
            warehouse,
            sku,
            "Item",
            ItemCategory::Component,
            20,
            "pcs",
            1_000.0,
            "2024-04-01",
        )
    }

    #[test]
    fn test_composite_key_duplicate_insert() {
        let mut store =
            RecordStore::keyed(vec![item("WH-JKT", "A-1")], InsertPosition::Front).unwrap();
        let err = store.insert(item("WH-JKT", "A-1")).unwrap_err();
        assert!(matches!(err, DashboardError::DuplicateId { .. }));
        assert!(store.insert(item("WH-SBY", "A-1")).is_ok());
    }

    #[test]
    fn test_composite_key_without_generator_needs_key() {
        let mut store: RecordStore<InventoryItem> =
            RecordStore::keyed(vec![], InsertPosition::Front).unwrap();
        let err = store.insert(InventoryItem::default()).unwrap_err();
        assert_eq!(
            err,
            DashboardError::MissingId {
                element: "Inventory item"
            }
        );
    }

    #[test]
    fn test_rekey_onto_existing_key_is_rejected() {
        let mut store = RecordStore::keyed(
            vec![item("WH-JKT", "A-1"), item("WH-JKT", "A-2")],
            InsertPosition::Back,
        )
        .unwrap();
        let key = InventoryKey::new("WH-JKT", "A-2");
        let err = store.update(&key, |r| r.sku = "A-1".into()).unwrap_err();
        assert!(matches!(err, DashboardError::DuplicateId { .. }));

        let moved = store.update(&key, |r| r.sku = "A-3".into()).unwrap();
        assert_eq!(moved.sku, "A-3");
        assert!(store.get(&key).is_none());
    }
}
