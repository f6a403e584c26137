//! Descriptive statistics and numeric conversions

use rust_decimal::Decimal;

use crate::error::{AnalyticsError, Result};

/// Arithmetic mean, 0 for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divides by n)
pub fn std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Sample standard deviation (divides by n - 1)
pub fn sample_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let variance =
        values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    variance.sqrt()
}

/// Percent change from `from` to `to`, relative to |from|
///
/// Returns None when `from` is zero.
pub fn pct_change(from: f64, to: f64) -> Option<f64> {
    if from == 0.0 {
        return None;
    }
    Some((to - from) / from.abs() * 100.0)
}

/// Round to 2 decimal places
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Round to 3 decimal places
pub fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

/// Lossy conversion of a decimal amount into f64 for statistics
pub fn decimal_to_f64(value: Decimal) -> f64 {
    value.try_into().unwrap_or(0.0)
}

/// Convert a computed amount back to a decimal rounded to cents
pub fn f64_to_decimal(value: f64, field: &str) -> Result<Decimal> {
    Decimal::try_from(value)
        .map(|d| d.round_dp(2))
        .map_err(|_| AnalyticsError::computation(format!("{field} is not representable: {value}")))
}
