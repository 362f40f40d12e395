use super::RecordId;
use crate::shared::metadata::{DateRangeRule, FieldMetadata};

/// Трейт для записи дашборда
///
/// Определяет идентичность записи и статические метаданные её таблицы
pub trait Record: Clone + std::fmt::Debug + 'static {
    /// Тип идентификатора записи
    type Id: RecordId;

    // ============================================================================
    // Методы экземпляра (данные конкретной записи)
    // ============================================================================

    /// Получить ID записи (None, если ID ещё не присвоен)
    fn id(&self) -> Option<Self::Id>;

    /// Присвоить ID записи (вызывается хранилищем при вставке)
    fn assign_id(&mut self, id: Self::Id);

    /// Короткое название записи для подтверждений и уведомлений
    fn title(&self) -> String;

    // ============================================================================
    // Метаданные таблицы (статические данные)
    // ============================================================================

    /// Индекс записи в системе (например, "a001")
    fn record_index() -> &'static str;

    /// Имя коллекции (например, "finance_transaction")
    fn collection_name() -> &'static str;

    /// Имя элемента для UI (единственное число)
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число)
    fn list_name() -> &'static str;

    /// Метаданные полей: подписи, типы и правила валидации формы
    fn field_metadata() -> &'static [FieldMetadata];

    /// Пары дат «начало / окончание», которые проверяются при сохранении
    fn date_ranges() -> &'static [DateRangeRule] {
        &[]
    }

    // ============================================================================
    // Методы с реализацией по умолчанию
    // ============================================================================

    /// Полное имя записи (например, "a001_finance_transaction")
    fn full_name() -> String {
        format!("{}_{}", Self::record_index(), Self::collection_name())
    }

    /// Найти метаданные поля по имени
    fn field(name: &str) -> Option<&'static FieldMetadata> {
        Self::field_metadata().iter().find(|f| f.name == name)
    }

    /// Подпись поля для UI; для неизвестного поля возвращается его имя
    fn field_label(name: &str) -> String {
        Self::field(name)
            .map(|f| f.label.to_string())
            .unwrap_or_else(|| name.to_string())
    }
}
