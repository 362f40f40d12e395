/// Доступ к полям записи по имени
///
/// Используется фильтрами (поиск, категория, диапазон дат) и редактором
/// формы. Значения передаются строками: поля формы являются controlled inputs.
pub trait FieldAccess {
    /// Возвращает значение поля в строковом виде (None для неизвестного поля)
    fn get_field_value(&self, field: &str) -> Option<String>;

    /// Устанавливает значение поля из строки ввода
    ///
    /// Ошибка разбора (число, перечисление) возвращается текстом сообщения,
    /// запись при этом не меняется.
    fn set_field_value(&mut self, field: &str, value: &str) -> Result<(), String>;
}

/// Разбор числового поля формы; пустая строка даёт 0
pub fn parse_number(value: &str, label: &str) -> Result<f64, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| format!("{} must be a number", label))
}

/// Разбор целочисленного поля формы; пустая строка даёт 0
pub fn parse_integer(value: &str, label: &str) -> Result<i64, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| format!("{} must be a whole number", label))
}

pub(crate) fn unknown_field(field: &str) -> String {
    format!("Unknown field: {}", field)
}
