//! Форматирование цен для карточек товаров

use super::config::CURRENCY_PREFIX;

/// Два знака после запятой; точная середина округляется вверх (от нуля).
///
/// `{:.2}` округляет середину к чётному: 10.125 -> "10.12". Середина бывает
/// только у дробей вида .125/.375/.625/.875, для них `value * 100` вычисляется точно.
fn to_fixed_2(value: f64) -> String {
    let magnitude = value.abs();
    let is_tie = (magnitude * 8.0).fract() == 0.0 && (magnitude * 4.0).fract() != 0.0;
    let rounded = if is_tie {
        (magnitude * 100.0 + 0.5).floor() / 100.0
    } else {
        magnitude
    };
    // -0.0 печатается без знака
    if value < 0.0 {
        format!("-{:.2}", rounded)
    } else {
        format!("{:.2}", rounded)
    }
}

/// Цена с двумя знаками после запятой, без разделителя тысяч
///
/// # Примеры
///
/// ```
/// use frontend::shared::number_format::format_price;
/// assert_eq!(format_price(19.9), "R$ 19.90");
/// ```
pub fn format_price(value: f64) -> String {
    format!("{} {}", CURRENCY_PREFIX, to_fixed_2(value))
}
