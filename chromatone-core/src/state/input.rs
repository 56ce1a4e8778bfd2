//! Validation for user-supplied numbers.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ConfigError;

/// Integer part, then an optional `.` or `,` with more digits.
static FLOAT_INPUT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^-?\d+(?:[.,]\d*)?$").expect("static float pattern")
});

/// Parse text typed into a ratio field.
///
/// Returns `None` for anything that is not a plain decimal number, so that a
/// half-typed value leaves the field alone. Parsing stops at a `,`, which
/// means `"1,5"` reads as `1`.
pub fn parse_ratio_input(raw: &str) -> Option<f64> {
    if !FLOAT_INPUT.is_match(raw) {
        return None;
    }
    let numeric = raw.split(',').next().unwrap_or(raw);
    numeric.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Clamp a ratio to `[0, 1]`, rejecting NaN and infinities.
pub fn clamp_unit(field: &str, value: f64) -> Result<f64, ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::InvalidNumber {
            field: field.to_string(),
            value,
        });
    }
    Ok(value.clamp(0.0, 1.0))
}
