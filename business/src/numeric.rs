//! Numeric normalization for table cells and form fields.

/// Parse a loosely formatted number.
///
/// Every character other than digits, `+`, `-`, `e`, `E` and `.` is dropped
/// first, so `"1,200 kg"` reads as `1200`. Empty or non-finite results are
/// `None`.
pub fn to_number(text: &str) -> Option<f64> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | 'e' | 'E' | '.'))
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// [`format_number`] for an optional field. `None` renders empty.
pub fn format_optional(value: Option<f64>) -> String {
    value.map(format_number).unwrap_or_default()
}

/// Display text for a numeric table cell.
///
/// Magnitudes `>= 1e6` or `<= 1e-6` (zero included) use exponential notation
/// with four fractional digits, e.g. `1.2346e+6`. Anything else is the plain
/// shortest decimal.
pub fn format_number(value: f64) -> String {
    // -0.0 prints as "0" / "0.0000e+0"
    let value = if value == 0.0 { 0.0 } else { value };
    let magnitude = value.abs();
    if magnitude >= 1e6 || magnitude <= 1e-6 {
        exponential(value)
    } else {
        format!("{value}")
    }
}

fn exponential(value: f64) -> String {
    let formatted = format!("{:.4e}", round_tie_away(value));
    match formatted.split_once('e') {
        Some((mantissa, exp)) if exp.starts_with('-') => format!("{mantissa}e{exp}"),
        Some((mantissa, exp)) => format!("{mantissa}e+{exp}"),
        None => formatted,
    }
}

/// `{:.4e}` breaks an exact tie toward the even digit; cells round it away
/// from zero instead. Outside `(1e-6, 1e6)` an exact tie on the fifth digit
/// can only be an integer below `1e28`.
fn round_tie_away(value: f64) -> f64 {
    if value.fract() != 0.0 || value.abs() >= 1e28 {
        return value;
    }
    let digits = (value.abs() as u128).to_string();
    let Some(tail) = digits.get(5..) else {
        return value;
    };
    let is_tie = tail.starts_with('5') && tail.bytes().skip(1).all(|b| b == b'0');
    if !is_tie {
        return value;
    }
    let half = 5.0 * 10f64.powi(tail.len() as i32 - 1);
    value + half.copysign(value)
}
