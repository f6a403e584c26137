//! Linear trend + additive month-of-year seasonality
//!
//! Trend is an ordinary least squares line over the month index. Seasonal
//! indices are the mean detrended residual per calendar month, centred so
//! they sum to zero. Prediction error follows the OLS prediction interval:
//! se(t) = sigma * sqrt(1 + 1/n + (t - t_mean)^2 / Sxx)

use super::{DecompositionModel, Observation, SeriesDecomposer};
use crate::series::mean;

/// Minimum history (two full years) before seasonality is estimated
pub const SEASONAL_MIN_POINTS: usize = 24;

/// Classical decomposition estimator
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearSeasonalDecomposer;

impl LinearSeasonalDecomposer {
    /// Create a new decomposer
    pub fn new() -> Self {
        Self
    }
}

/// Fitted linear + seasonal model
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSeasonalModel {
    pub intercept: f64,
    pub slope: f64,
    /// Seasonal index per 0-based calendar month (all zero when not estimated)
    pub seasonal_indices: [f64; 12],
    /// Residual standard error
    pub sigma: f64,
    n: usize,
    t_mean: f64,
    sxx: f64,
}

impl LinearSeasonalModel {
    /// Whether seasonal indices were estimated
    pub fn has_seasonality(&self) -> bool {
        self.seasonal_indices.iter().any(|s| *s != 0.0)
    }
}

impl SeriesDecomposer for LinearSeasonalDecomposer {
    type Model = LinearSeasonalModel;

    fn fit(&self, history: &[Observation]) -> LinearSeasonalModel {
        let n = history.len();
        let ts: Vec<f64> = history.iter().map(|o| o.t).collect();
        let ys: Vec<f64> = history.iter().map(|o| o.value).collect();
        let t_mean = mean(&ts);
        let y_mean = mean(&ys);

        let sxx: f64 = ts.iter().map(|t| (t - t_mean).powi(2)).sum();
        let sxy: f64 = ts
            .iter()
            .zip(&ys)
            .map(|(t, y)| (t - t_mean) * (y - y_mean))
            .sum();

        // All observations on one month index: flat trend
        let slope = if sxx > 0.0 { sxy / sxx } else { 0.0 };
        let intercept = y_mean - slope * t_mean;

        let residuals: Vec<f64> = history
            .iter()
            .map(|o| o.value - (intercept + slope * o.t))
            .collect();

        let seasonal_indices = seasonal_indices(history, &residuals);
        let seasonal_params = if seasonal_indices.iter().any(|s| *s != 0.0) {
            11
        } else {
            0
        };

        let sse: f64 = history
            .iter()
            .zip(&residuals)
            .map(|(o, r)| (r - seasonal_indices[o.month0 as usize % 12]).powi(2))
            .sum();
        let dof = n.saturating_sub(2 + seasonal_params).max(1);
        let sigma = (sse / dof as f64).sqrt();

        LinearSeasonalModel {
            intercept,
            slope,
            seasonal_indices,
            sigma,
            n,
            t_mean,
            sxx,
        }
    }
}

/// Centred month-of-year means of the detrended residuals
fn seasonal_indices(history: &[Observation], residuals: &[f64]) -> [f64; 12] {
    let mut indices = [0.0; 12];
    if history.len() < SEASONAL_MIN_POINTS {
        return indices;
    }

    let mut sums = [0.0; 12];
    let mut counts = [0usize; 12];
    for (obs, r) in history.iter().zip(residuals) {
        let m = obs.month0 as usize % 12;
        sums[m] += r;
        counts[m] += 1;
    }

    // Every calendar month must be observed
    if counts.iter().any(|c| *c == 0) {
        return indices;
    }

    for m in 0..12 {
        indices[m] = sums[m] / counts[m] as f64;
    }
    let centre = mean(&indices);
    for index in indices.iter_mut() {
        *index -= centre;
    }
    indices
}

impl DecompositionModel for LinearSeasonalModel {
    fn trend(&self, t: f64) -> f64 {
        self.intercept + self.slope * t
    }

    fn seasonal(&self, month0: u32) -> f64 {
        self.seasonal_indices[month0 as usize % 12]
    }

    fn prediction_std_error(&self, t: f64) -> f64 {
        let n = self.n.max(1) as f64;
        let leverage = if self.sxx > 0.0 {
            (t - self.t_mean).powi(2) / self.sxx
        } else {
            0.0
        };
        self.sigma * (1.0 + 1.0 / n + leverage).sqrt()
    }
}
