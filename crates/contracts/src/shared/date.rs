//! ISO date helpers
//!
//! Stored dates are plain `yyyy-mm-dd` strings, optionally followed by a
//! `T...` time part.

use chrono::NaiveDate;

/// Разбор ISO даты ("2024-03-15" или "2024-03-15T14:02:26Z")
pub fn parse_iso_date(value: &str) -> Result<NaiveDate, String> {
    let trimmed = value.trim();
    let date_part = trimmed.split('T').next().unwrap_or(trimmed);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|_| format!("Invalid date '{}', expected yyyy-mm-dd", value))
}
