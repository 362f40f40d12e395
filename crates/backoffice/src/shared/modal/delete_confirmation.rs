use contracts::domain::common::{Record, RecordId};

use crate::shared::error::{DashboardError, DashboardResult};
use crate::shared::list::RecordStore;

/// Состояние диалога подтверждения удаления
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteState<Id> {
    Hidden,
    Confirming {
        id: Id,
        /// Название записи для текста "Удалить ...?"
        label: String,
    },
}

/// Диалог подтверждения удаления
///
/// Удаление происходит только через `request` + `confirm`.
#[derive(Debug, Clone)]
pub struct DeleteConfirmation<R: Record> {
    state: DeleteState<R::Id>,
}

impl<R: Record> Default for DeleteConfirmation<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> DeleteConfirmation<R> {
    pub fn new() -> Self {
        Self {
            state: DeleteState::Hidden,
        }
    }

    pub fn state(&self) -> &DeleteState<R::Id> {
        &self.state
    }

    pub fn is_confirming(&self) -> bool {
        matches!(self.state, DeleteState::Confirming { .. })
    }

    /// Текст вопроса для диалога
    pub fn prompt(&self) -> Option<String> {
        match &self.state {
            DeleteState::Hidden => None,
            DeleteState::Confirming { label, .. } => {
                Some(format!("Delete {} \"{}\"?", R::element_name().to_lowercase(), label))
            }
        }
    }

    /// Запомнить запись и показать диалог; список не меняется
    pub fn request(&mut self, store: &RecordStore<R>, id: &R::Id) -> DashboardResult<()> {
        let record = store.get(id).ok_or_else(|| DashboardError::NotFound {
            element: R::element_name(),
            id: id.as_string(),
        })?;
        tracing::debug!("{}: delete requested for {}", R::full_name(), id.as_string());
        self.state = DeleteState::Confirming {
            id: id.clone(),
            label: record.title(),
        };
        Ok(())
    }

    /// Удалить запомненную запись и скрыть диалог
    ///
    /// Без открытого диалога ничего не удаляется. Если запись уже исчезла,
    /// возвращается `NotFound`, хранилище не меняется.
    pub fn confirm(&mut self, store: &mut RecordStore<R>) -> DashboardResult<Option<R>> {
        let state = std::mem::replace(&mut self.state, DeleteState::Hidden);
        let DeleteState::Confirming { id, .. } = state else {
            return Ok(None);
        };

        match store.remove(&id) {
            Some(removed) => Ok(Some(removed)),
            None => {
                tracing::warn!(
                    "{}: {} vanished before delete confirmation",
                    R::full_name(),
                    id.as_string()
                );
                Err(DashboardError::NotFound {
                    element: R::element_name(),
                    id: id.as_string(),
                })
            }
        }
    }

    /// Скрыть диалог без удаления
    pub fn cancel(&mut self) {
        self.state = DeleteState::Hidden;
    }
}
