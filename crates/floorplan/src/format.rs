//! Display formatting for prices and areas.

/// Thousands separator of the `ru-RU` locale.
const GROUP_SEPARATOR: char = '\u{a0}';

/// Formats a whole amount with grouped thousands, e.g. `4 250 000`.
///
/// Fractions are rounded. Non-finite values format as `0`.
pub fn group_thousands(value: f64) -> String {
    let rounded = if value.is_finite() { value.round() } else { 0.0 };
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(digit);
    }

    if rounded < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Formats a price followed by its currency.
pub fn price(value: f64, currency: &str) -> String {
    format!("{} {currency}", group_thousands(value))
}

/// Formats an area in square meters, without trailing zeros.
pub fn area(value: f64) -> String {
    format!("{value} м²")
}
