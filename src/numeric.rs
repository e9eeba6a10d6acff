//! Numeric-tolerant value equality shared by the table and node comparers

/// Parse a value as a finite number.
///
/// Parsing never consults the process locale: `.` is the only decimal
/// separator and no grouping characters are accepted. Non-finite spellings
/// such as `NaN` or `inf` are treated as text so that equality stays
/// reflexive.
pub fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Compare two raw values: numerically when both sides are numbers,
/// otherwise as exact strings.
pub fn values_equal(expected: &str, actual: &str) -> bool {
    match (parse_number(expected), parse_number(actual)) {
        (Some(e), Some(a)) => e == a,
        _ => expected == actual,
    }
}
