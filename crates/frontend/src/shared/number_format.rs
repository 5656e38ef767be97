//! Форматирование цен для карточек товаров

/// Форматирует число с разделителем тысяч (пробел) и указанным количеством знаков после запятой
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = match decimals {
        0 => format!("{:.0}", value),
        1 => format!("{:.1}", value),
        _ => format!("{:.2}", value),
    };

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((integer, decimal)) => (integer, Some(decimal)),
        None => (formatted.as_str(), None),
    };

    // Вставляем пробелы каждые 3 цифры с конца целой части
    let mut result = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 && c != '-' {
            result.push(' ');
        }
        result.push(c);
    }
    let formatted_integer = result.chars().rev().collect::<String>();

    match decimal_part {
        Some(d) => format!("{}.{}", formatted_integer, d),
        None => formatted_integer,
    }
}

/// Цена с символом валюты: целые цены без дробной части, остальные с двумя знаками
///
/// ```ignore
/// assert_eq!(format_price(1084.0, "¥"), "¥1 084");
/// ```
pub fn format_price(value: f64, currency: &str) -> String {
    let decimals = if value.fract() == 0.0 { 0 } else { 2 };
    format!("{}{}", currency, format_number_with_decimals(value, decimals))
}
