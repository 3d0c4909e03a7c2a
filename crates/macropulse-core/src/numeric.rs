//! Tolerant numeric parsing at the data boundary.
//!
//! Upstream suppliers deliver values as display strings (`"1,310.45"`,
//! `"3.5"`), and malformed records are a cleaning concern rather than an
//! error condition. Everything downstream of this module works with
//! already-validated finite floats.

/// Parse a display-formatted decimal, discarding anything non-finite.
///
/// Thousands-separator commas are stripped before parsing. Returns `None`
/// for empty, unparseable, NaN, or infinite input.
pub fn parse_finite(input: &str) -> Option<f64> {
    let cleaned: String = input
        .trim()
        .chars()
        .filter(|ch| *ch != ',')
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    cleaned.parse::<f64>().ok().and_then(finite)
}

/// Keep a float only if it is finite.
pub fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}
