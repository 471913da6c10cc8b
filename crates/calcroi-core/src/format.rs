//! Best-effort numeric parsing and two-decimal formatting.

use serde_json::Value;

use crate::constants::MISSING_FIELD;

/// Format a value with exactly two decimals.
///
/// A value lying exactly halfway between two cents rounds away from zero
/// (`0.125` → `0.13`); every other value rounds to the nearest cent. Zero is
/// unsigned. NaN renders as `NaN` and infinities as `Infinity` / `-Infinity`.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn fixed2(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0.00".to_string();
    }

    let magnitude = value.abs();
    let cents = magnitude * 100.0;
    // The product is exact when the fused remainder is zero.
    let exact_tie = cents.fract() == 0.5 && magnitude.mul_add(100.0, -cents) == 0.0;
    let digits = if exact_tie {
        format!("{:.2}", cents.ceil() / 100.0)
    } else {
        format!("{magnitude:.2}")
    };

    if value < 0.0 {
        format!("-{digits}")
    } else {
        digits
    }
}

/// Parse a JSON value as a number. Non-numeric values become NaN.
#[must_use]
pub fn parse_numeric(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => parse_numeric_str(s),
        _ => f64::NAN,
    }
}

/// Parse a numeric string. Only decimal notation and the literal
/// `Infinity` are accepted; anything else is NaN. The whole trimmed string
/// must be numeric, so `"12.5abc"` and `"0x10"` are NaN too.
#[must_use]
pub fn parse_numeric_str(s: &str) -> f64 {
    let s = s.trim();
    match s {
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        _ if s
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'+' | b'-' | b'e' | b'E')) =>
        {
            s.parse().unwrap_or(f64::NAN)
        }
        _ => f64::NAN,
    }
}

/// Render a raw JSON scalar for interpolation into text.
#[must_use]
pub fn display_scalar(value: Option<&Value>) -> String {
    match value {
        None => MISSING_FIELD.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
