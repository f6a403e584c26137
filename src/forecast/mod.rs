//! Cash flow forecasting module
//!
//! Decomposes a monthly history into trend and yearly seasonality, then
//! projects it forward with confidence bands, insights and a risk score.

mod decompose;
mod insights;
mod predictor;

pub use decompose::{LinearSeasonalDecomposer, LinearSeasonalModel};
pub use insights::{generate_insights, recommended_actions, risk_score};
pub use predictor::CashFlowPredictor;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Smallest accepted forecast horizon
pub const MIN_FORECAST_PERIODS: u32 = 1;
/// Largest accepted forecast horizon
pub const MAX_FORECAST_PERIODS: u32 = 60;
/// Smallest accepted confidence level
pub const MIN_CONFIDENCE_LEVEL: f64 = 0.8;
/// Largest accepted confidence level
pub const MAX_CONFIDENCE_LEVEL: f64 = 0.99;

/// Observation prepared for model fitting
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    /// Months elapsed since the first observation
    pub t: f64,
    /// Calendar month, 0-based
    pub month0: u32,
    /// Observed value
    pub value: f64,
}

/// Trait for trend + yearly seasonality estimators
pub trait SeriesDecomposer: Send + Sync {
    /// Fitted model type
    type Model: DecompositionModel;

    /// Fit the model over the historical observations
    fn fit(&self, history: &[Observation]) -> Self::Model;
}

/// A fitted additive decomposition
pub trait DecompositionModel {
    /// Trend component at time index `t`
    fn trend(&self, t: f64) -> f64;
    /// Yearly seasonal component for a 0-based calendar month
    fn seasonal(&self, month0: u32) -> f64;
    /// Standard error of a new prediction at time index `t`
    fn prediction_std_error(&self, t: f64) -> f64;

    /// Point prediction (trend + seasonality)
    fn predict(&self, t: f64, month0: u32) -> f64 {
        self.trend(t) + self.seasonal(month0)
    }
}

/// Direction of the projected trend relative to history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Upward,
    Downward,
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrendDirection::Upward => write!(f, "upward"),
            TrendDirection::Downward => write!(f, "downward"),
        }
    }
}

/// A single projected period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub predicted_value: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
    /// Trend component alone
    pub trend_value: f64,
}

/// Complete cash flow forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    pub forecast: Vec<ForecastPoint>,
    pub trend_direction: TrendDirection,
    pub seasonality_detected: bool,
    pub insights: Vec<String>,
    /// 0 (safe) to 100 (critical)
    pub risk_score: f64,
    pub recommended_actions: Vec<String>,
}

impl ForecastResult {
    /// Format as table for CLI output
    pub fn format_table(&self) -> String {
        let mut out = String::new();
        out.push_str("\n══════════════════════════════════════════════════════════════\n");
        out.push_str("                     CASH FLOW FORECAST\n");
        out.push_str("══════════════════════════════════════════════════════════════\n");
        out.push_str(&format!(
            "{:<12} {:>12} {:>12} {:>12} {:>12}\n",
            "Date", "Predicted", "Lower", "Upper", "Trend"
        ));
        out.push_str("──────────────────────────────────────────────────────────────\n");
        for point in &self.forecast {
            out.push_str(&format!(
                "{:<12} {:>12.2} {:>12.2} {:>12.2} {:>12.2}\n",
                point.date,
                point.predicted_value,
                point.lower_bound,
                point.upper_bound,
                point.trend_value
            ));
        }
        out.push_str("──────────────────────────────────────────────────────────────\n");
        out.push_str(&format!("Trend:            {}\n", self.trend_direction));
        out.push_str(&format!("Seasonality:      {}\n", self.seasonality_detected));
        out.push_str(&format!("Risk Score:       {:.2}\n", self.risk_score));
        for insight in &self.insights {
            out.push_str(&format!("  * {insight}\n"));
        }
        for action in &self.recommended_actions {
            out.push_str(&format!("  > {action}\n"));
        }
        out
    }
}

/// Whole months elapsed between two dates' calendar months
pub(crate) fn months_between(from: NaiveDate, to: NaiveDate) -> i64 {
    let index = |d: NaiveDate| d.year() as i64 * 12 + d.month0() as i64;
    index(to) - index(from)
}
