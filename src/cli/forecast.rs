//! Forecast command implementation

use clap::Args;
use serde::Deserialize;
use std::path::PathBuf;

use super::{read_request, render, OutputFormat};
use crate::config::Config;
use crate::engine;
use crate::series::TimeSeriesPoint;

#[derive(Args, Debug)]
pub struct ForecastArgs {
    /// JSON file with `historical_data` and optional `forecast_periods` / `confidence_level`
    #[arg(short, long)]
    pub input: PathBuf,

    /// Months to forecast (overrides the request file)
    #[arg(long)]
    pub periods: Option<u32>,

    /// Confidence level for the bands (overrides the request file)
    #[arg(long)]
    pub confidence: Option<f64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

#[derive(Debug, Deserialize)]
struct ForecastRequest {
    historical_data: Vec<TimeSeriesPoint>,
    #[serde(default)]
    forecast_periods: Option<u32>,
    #[serde(default)]
    confidence_level: Option<f64>,
}

impl ForecastArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<String> {
        let request: ForecastRequest = read_request(&self.input)?;
        let periods = self
            .periods
            .or(request.forecast_periods)
            .unwrap_or(config.forecast.default_periods);
        let confidence = self
            .confidence
            .or(request.confidence_level)
            .unwrap_or(config.forecast.default_confidence);

        tracing::info!(
            points = request.historical_data.len(),
            periods,
            confidence,
            "Forecasting cash flow"
        );
        let result = engine::forecast_cash_flow(&request.historical_data, periods, confidence)?;
        render(self.format, &result, || result.format_table())
    }
}
