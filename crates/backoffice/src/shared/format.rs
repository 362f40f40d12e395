//! Форматирование для отображения в локали id-ID
//!
//! Хранятся даты в ISO (`yyyy-mm-dd`), здесь только представление.

/// Форматирует целое число с разделителями тысяч (точками)
///
/// # Примеры
/// ```
/// use backoffice::shared::format::format_number;
/// assert_eq!(format_number(1234567), "1.234.567");
/// assert_eq!(format_number(-42), "-42");
/// ```
pub fn format_number(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut result = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// Число с заданным количеством знаков после запятой: 1234.5 -> "1.234,50"
pub fn format_decimal(value: f64, decimals: usize) -> String {
    let rendered = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match rendered.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (rendered.as_str(), None),
    };

    let mut result = int_part
        .parse::<i64>()
        .map(format_number)
        .unwrap_or_else(|_| int_part.to_string());
    if let Some(frac) = frac_part {
        result.push(',');
        result.push_str(frac);
    }
    if value < 0.0 && rendered.chars().any(|c| c.is_ascii_digit() && c != '0') {
        result.insert(0, '-');
    }
    result
}

/// Сумма в рупиях без дробной части: 4500000.0 -> "Rp 4.500.000"
pub fn format_rupiah(amount: f64) -> String {
    let rounded = amount.round();
    if rounded < 0.0 {
        format!("-Rp {}", format_decimal(-rounded, 0))
    } else {
        format!("Rp {}", format_decimal(rounded, 0))
    }
}

/// Format ISO date string to DD/MM/YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15/03/2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}/{}/{}", day, month, year);
        }
    }
    date_str.to_string()
}
