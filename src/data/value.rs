use crate::error::{Error, Result};

/// Parse observation text like "1.50", " 2.3 ", "-1" or "1e0".
///
/// Anything that does not denote a finite real number is rejected,
/// including "NaN" and "inf" which `f64::from_str` would otherwise accept.
pub fn parse_observation(s: &str) -> Result<f64> {
    let trimmed = s.trim();

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(Error::InvalidInput {
            input: s.to_string(),
        }),
    }
}

/// Format an observation for tables and CSV rows.
///
/// Whole numbers keep a single decimal ("2.0"), everything else uses the
/// shortest representation that round-trips ("1.1").
pub fn format_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// Format a mean as a multiplier, e.g. "2.35x".
pub fn format_mean(mean: f64) -> String {
    format!("{:.2}x", mean)
}
