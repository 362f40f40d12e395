use contracts::domain::common::{FieldAccess, Record, RecordId};
use contracts::shared::metadata::{validate_record, FieldErrors};

use crate::shared::error::{DashboardError, DashboardResult};
use crate::shared::list::RecordStore;

/// Режим модальной формы
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode<Id> {
    Closed,
    Adding,
    Editing(Id),
}

/// Форма добавления/редактирования записи
///
/// Черновик живёт только в форме; хранилище меняется лишь в `submit`.
#[derive(Debug, Clone)]
pub struct FormEditor<R: Record> {
    mode: EditorMode<R::Id>,
    draft: Option<R>,
    errors: FieldErrors,
}

impl<R> Default for FormEditor<R>
where
    R: Record + FieldAccess + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<R> FormEditor<R>
where
    R: Record + FieldAccess + Default,
{
    pub fn new() -> Self {
        Self {
            mode: EditorMode::Closed,
            draft: None,
            errors: FieldErrors::new(),
        }
    }

    pub fn mode(&self) -> &EditorMode<R::Id> {
        &self.mode
    }

    pub fn is_open(&self) -> bool {
        self.mode != EditorMode::Closed
    }

    pub fn is_edit_mode(&self) -> bool {
        matches!(self.mode, EditorMode::Editing(_))
    }

    pub fn draft(&self) -> Option<&R> {
        self.draft.as_ref()
    }

    /// Ошибки по полям после последней попытки сохранения
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Открыть форму для новой записи с пустым черновиком
    pub fn open_add(&mut self) {
        self.open(EditorMode::Adding, R::default());
    }

    /// Открыть форму с копией существующей записи
    pub fn open_edit(&mut self, store: &RecordStore<R>, id: &R::Id) -> DashboardResult<()> {
        let record = store.get(id).ok_or_else(|| DashboardError::NotFound {
            element: R::element_name(),
            id: id.as_string(),
        })?;
        self.open(EditorMode::Editing(id.clone()), record.clone());
        Ok(())
    }

    fn open(&mut self, mode: EditorMode<R::Id>, draft: R) {
        tracing::debug!("{}: editor opened ({:?})", R::full_name(), mode);
        self.mode = mode;
        self.draft = Some(draft);
        self.errors.clear();
    }

    /// Изменить одно поле черновика
    ///
    /// Ошибка разбора остаётся рядом с полем, черновик при этом не меняется.
    pub fn set_field(&mut self, field: &str, value: &str) -> DashboardResult<()> {
        let draft = self.draft.as_mut().ok_or_else(|| {
            DashboardError::field(field, format!("{} form is not open", R::element_name()))
        })?;

        match draft.set_field_value(field, value) {
            Ok(()) => {
                self.errors.remove(field);
                Ok(())
            }
            Err(message) => {
                self.errors.insert(field.to_string(), message.clone());
                Err(DashboardError::field(field, message))
            }
        }
    }

    /// Проверить черновик и записать его в хранилище
    ///
    /// При ошибках валидации форма остаётся открытой с ошибками по полям.
    /// Если редактируемая запись уже удалена, форма закрывается с `NotFound`.
    pub fn submit(&mut self, store: &mut RecordStore<R>) -> DashboardResult<R> {
        let draft = match (&self.mode, &self.draft) {
            (EditorMode::Closed, _) | (_, None) => {
                return Err(DashboardError::field(
                    "form",
                    format!("{} form is not open", R::element_name()),
                ));
            }
            (_, Some(draft)) => draft.clone(),
        };

        if let Err(errors) = validate_record(&draft) {
            tracing::debug!(
                "{}: validation failed for {} field(s)",
                R::full_name(),
                errors.len()
            );
            self.errors = errors.clone();
            return Err(DashboardError::Validation(errors));
        }

        let result = match &self.mode {
            EditorMode::Adding => store.insert(draft),
            EditorMode::Editing(id) => {
                let id = id.clone();
                store.update(&id, move |record| *record = draft)
            }
            EditorMode::Closed => unreachable!("closed editor has no draft"),
        };

        match result {
            Ok(saved) => {
                self.close();
                Ok(saved)
            }
            Err(err @ DashboardError::NotFound { .. }) => {
                tracing::warn!("{}: {}", R::full_name(), err);
                self.close();
                Err(err)
            }
            Err(err) => {
                if let DashboardError::DuplicateId { .. } = &err {
                    self.errors.insert("id".to_string(), err.to_string());
                }
                Err(err)
            }
        }
    }

    /// Закрыть форму без сохранения
    pub fn cancel(&mut self) {
        if self.is_open() {
            tracing::debug!("{}: editor cancelled", R::full_name());
        }
        self.close();
    }

    fn close(&mut self) {
        self.mode = EditorMode::Closed;
        self.draft = None;
        self.errors.clear();
    }
}
