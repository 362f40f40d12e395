use contracts::domain::common::{FieldAccess, Record};

use super::list::{FilterSpec, IdGenerator};

/// Описание одного дашборда для универсальной view model
///
/// Дашборд задаёт только тип записи, поля фильтров, стратегию ID и
/// начальные данные. Всё остальное общее.
pub trait DashboardSchema {
    type Record: Record + FieldAccess + Default;

    /// Ключ дашборда, например "d404_travel_requests"
    fn key() -> &'static str;

    /// Заголовок страницы
    fn title() -> &'static str;

    fn filter_spec() -> FilterSpec;

    /// Генератор ID; None для записей с составным ключом
    fn id_generator() -> Option<Box<dyn IdGenerator<<Self::Record as Record>::Id>>>;

    /// Демонстрационные данные (используются, если данные не переданы явно)
    fn sample_data() -> Vec<Self::Record>;
}
