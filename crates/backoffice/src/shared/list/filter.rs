//! Фильтрация списков: поиск по тексту, категория, диапазон дат
use chrono::NaiveDate;
use contracts::domain::common::{FieldAccess, Record, RecordId};
use contracts::shared::date::parse_iso_date;
use serde::{Deserialize, Serialize};

use crate::shared::error::{DashboardError, DashboardResult};

/// Какие поля записи участвуют в фильтрах дашборда
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSpec {
    /// Поля для текстового поиска (совпадение в любом из них)
    pub search_fields: &'static [&'static str],
    /// Поле для выбора категории/статуса
    pub category_field: Option<&'static str>,
    /// Поле-дата для диапазона «с / по»
    pub date_field: Option<&'static str>,
}

/// Состояние фильтров, выбранных пользователем
///
/// Хранится отдельно от записей и никогда не сохраняется вместе с ними.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub search: String,
    /// None, пустая строка или "all": все категории
    pub category: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
}

impl FilterState {
    pub fn search(text: &str) -> Self {
        Self {
            search: text.to_string(),
            ..Self::default()
        }
    }

    /// Хотя бы один фильтр задан
    pub fn is_active(&self) -> bool {
        !self.search.trim().is_empty()
            || self.selected_category().is_some()
            || bound(&self.date_from).is_some()
            || bound(&self.date_to).is_some()
    }

    /// Выбранная категория без учёта "all"
    pub fn selected_category(&self) -> Option<&str> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case("all"))
    }

    /// Разобрать границы диапазона дат; пустая граница не ограничивает
    pub fn date_bounds(&self) -> DashboardResult<(Option<NaiveDate>, Option<NaiveDate>)> {
        let from = parse_bound(&self.date_from, "date_from")?;
        let to = parse_bound(&self.date_to, "date_to")?;
        Ok((from, to))
    }
}

fn bound(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse_bound(value: &Option<String>, field: &str) -> DashboardResult<Option<NaiveDate>> {
    bound(value)
        .map(parse_iso_date)
        .transpose()
        .map_err(|e| DashboardError::field(field, e))
}

/// Текстовый поиск без учёта регистра; пустой запрос подходит всем
pub fn matches_search<R: FieldAccess>(record: &R, fields: &[&str], search: &str) -> bool {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields.iter().any(|field| {
        record
            .get_field_value(field)
            .map(|value| value.to_lowercase().contains(&needle))
            .unwrap_or(false)
    })
}

/// Точное совпадение категории; отсутствие выбора подходит всем
pub fn matches_category<R: FieldAccess>(record: &R, field: Option<&str>, category: Option<&str>) -> bool {
    match (field, category) {
        (Some(field), Some(category)) => record.get_field_value(field).as_deref() == Some(category),
        _ => true,
    }
}

/// Дата записи внутри диапазона, обе границы включительно
///
/// Некорректная дата в записи считается ошибкой валидации, а не молчаливое
/// исключение записи из выборки. Запись без даты (поле необязательное) при
/// заданном диапазоне просто не попадает в выборку.
pub fn matches_date_range<R: Record + FieldAccess>(
    record: &R,
    field: Option<&str>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> DashboardResult<bool> {
    let Some(field) = field else {
        return Ok(true);
    };
    if from.is_none() && to.is_none() {
        return Ok(true);
    }

    let raw = record.get_field_value(field).unwrap_or_default();
    if raw.trim().is_empty() {
        return Ok(false);
    }
    let date = parse_iso_date(&raw).map_err(|e| {
        let id = record.id().map(|id| id.as_string()).unwrap_or_default();
        DashboardError::field(field, format!("{} '{}': {}", R::element_name(), id, e))
    })?;

    Ok(from.map_or(true, |f| date >= f) && to.map_or(true, |t| date <= t))
}

/// Отфильтровать список: все активные условия объединяются по AND
///
/// Возвращает производную копию, исходный список не меняется.
pub fn apply_filter<R>(items: &[R], spec: &FilterSpec, state: &FilterState) -> DashboardResult<Vec<R>>
where
    R: Record + FieldAccess,
{
    let (from, to) = state.date_bounds()?;
    let category = state.selected_category();

    let mut result = Vec::with_capacity(items.len());
    for item in items {
        if !matches_search(item, spec.search_fields, &state.search) {
            continue;
        }
        if !matches_category(item, spec.category_field, category) {
            continue;
        }
        if !matches_date_range(item, spec.date_field, from, to)? {
            continue;
        }
        result.push(item.clone());
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a004_travel_request::{ApprovalStatus, TravelRequest};

    const TRAVEL_FILTERS: FilterSpec = FilterSpec {
        search_fields: &["employee", "destination"],
        category_field: Some("status"),
        date_field: Some("departure_date"),
    };

    fn request(employee: &str, destination: &str, departure: &str, status: ApprovalStatus) -> TravelRequest {
        TravelRequest::new(employee, "Finance", destination, "Visit", departure, departure, 1_000_000.0)
            .with_status(status)
    }

    fn sample() -> Vec<TravelRequest> {
        vec![
            request("Budi Santoso", "Surabaya", "2024-07-01", ApprovalStatus::Pending),
            request("Siti Aminah", "Medan", "2024-07-10", ApprovalStatus::Approved),
            request("Agus Salim", "Makassar", "2024-08-02", ApprovalStatus::Rejected),
            request("Dewi Lestari", "Bandung", "2024-08-15", ApprovalStatus::Approved),
        ]
    }

    fn employees(items: &[TravelRequest]) -> Vec<&str> {
        items.iter().map(|r| r.employee.as_str()).collect()
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let items = sample();
        let result = apply_filter(&items, &TRAVEL_FILTERS, &FilterState::default()).unwrap();
        assert_eq!(result, items);
        assert!(!FilterState::default().is_active());
    }

    #[test]
    fn test_search_is_case_insensitive_over_any_field() {
        let items = sample();
        let by_name = apply_filter(&items, &TRAVEL_FILTERS, &FilterState::search("siti")).unwrap();
        assert_eq!(employees(&by_name), vec!["Siti Aminah"]);

        let by_city = apply_filter(&items, &TRAVEL_FILTERS, &FilterState::search("BAND")).unwrap();
        assert_eq!(employees(&by_city), vec!["Dewi Lestari"]);
    }

    #[test]
    fn test_category_all_matches_everything() {
        let items = sample();
        let state = FilterState {
            category: Some("All".into()),
            ..FilterState::default()
        };
        assert_eq!(apply_filter(&items, &TRAVEL_FILTERS, &state).unwrap().len(), 4);

        let state = FilterState {
            category: Some("Approved".into()),
            ..FilterState::default()
        };
        let result = apply_filter(&items, &TRAVEL_FILTERS, &state).unwrap();
        assert_eq!(employees(&result), vec!["Siti Aminah", "Dewi Lestari"]);
    }

    #[test]
    fn test_date_range_is_inclusive_and_half_open_bounds_work() {
        let items = sample();
        let state = FilterState {
            date_from: Some("2024-07-10".into()),
            date_to: Some("2024-08-02".into()),
            ..FilterState::default()
        };
        let result = apply_filter(&items, &TRAVEL_FILTERS, &state).unwrap();
        assert_eq!(employees(&result), vec!["Siti Aminah", "Agus Salim"]);

        let from_only = FilterState {
            date_from: Some("2024-08-01".into()),
            ..FilterState::default()
        };
        assert_eq!(apply_filter(&items, &TRAVEL_FILTERS, &from_only).unwrap().len(), 2);
    }

    #[test]
    fn test_predicates_are_anded() {
        let items = sample();
        let state = FilterState {
            search: "a".into(),
            category: Some("Approved".into()),
            date_from: Some("2024-08-01".into()),
            date_to: None,
        };
        let result = apply_filter(&items, &TRAVEL_FILTERS, &state).unwrap();
        assert_eq!(employees(&result), vec!["Dewi Lestari"]);
    }

    #[test]
    fn test_malformed_bound_is_validation_error() {
        let items = sample();
        let state = FilterState {
            date_from: Some("01/07/2024".into()),
            ..FilterState::default()
        };
        let err = apply_filter(&items, &TRAVEL_FILTERS, &state).unwrap_err();
        assert!(err.field_errors().unwrap().contains_key("date_from"));
    }

    #[test]
    fn test_malformed_record_date_is_validation_error() {
        let mut items = sample();
        items[2].departure_date = "soon".into();
        let state = FilterState {
            date_to: Some("2024-12-31".into()),
            ..FilterState::default()
        };
        let err = apply_filter(&items, &TRAVEL_FILTERS, &state).unwrap_err();
        assert!(err.field_errors().unwrap().contains_key("departure_date"));

        // Без диапазона дат запись с плохой датой не мешает поиску
        assert_eq!(apply_filter(&items, &TRAVEL_FILTERS, &FilterState::search("agus")).unwrap().len(), 1);
    }

    #[test]
    fn test_record_without_date_is_left_out_of_range() {
        let mut items = sample();
        items[2].departure_date = "  ".into();
        let state = FilterState {
            date_from: Some("2024-01-01".into()),
            ..FilterState::default()
        };
        let result = apply_filter(&items, &TRAVEL_FILTERS, &state).unwrap();
        assert_eq!(result.len(), items.len() - 1);
        assert!(result.iter().all(|r| !r.departure_date.trim().is_empty()));

        // Без диапазона запись остаётся в списке
        assert_eq!(apply_filter(&items, &TRAVEL_FILTERS, &FilterState::default()).unwrap().len(), items.len());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let items = sample();
        let state = FilterState {
            search: "a".into(),
            date_to: Some("2024-08-10".into()),
            ..FilterState::default()
        };
        let once = apply_filter(&items, &TRAVEL_FILTERS, &state).unwrap();
        let twice = apply_filter(&once, &TRAVEL_FILTERS, &state).unwrap();
        assert_eq!(once, twice);
    }
}
