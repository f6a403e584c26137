//! Series utilities
//!
//! Shared statistics primitives and the time series point type used by
//! every predictor.

mod normal;
mod stats;

pub use normal::normal_quantile;
pub use stats::{
    decimal_to_f64, f64_to_decimal, mean, pct_change, round2, round3, sample_std_dev, std_dev,
};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single dated observation
///
/// Sequences are taken in insertion order, which is assumed to be
/// chronological. Duplicate dates are kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    /// Observation date
    pub date: NaiveDate,
    /// Observed value
    pub value: f64,
}

impl TimeSeriesPoint {
    /// Create a new point
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// Extract the values of a series in order
pub fn values(series: &[TimeSeriesPoint]) -> Vec<f64> {
    series.iter().map(|p| p.value).collect()
}
