//! Configuration types for smb-analytics

use serde::Deserialize;

use crate::forecast::{
    MAX_CONFIDENCE_LEVEL, MAX_FORECAST_PERIODS, MIN_CONFIDENCE_LEVEL, MIN_FORECAST_PERIODS,
};
use crate::risk::MarketDataPolicy;
use crate::telemetry::LogFormat;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    #[serde(default)]
    pub forecast: ForecastConfig,
    #[serde(default)]
    pub risk: RiskConfig,
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    /// EnvFilter directive, overridden by RUST_LOG
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            format: LogFormat::Pretty,
        }
    }
}

/// Forecast defaults applied when a request omits them
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastConfig {
    #[serde(default = "default_periods")]
    pub default_periods: u32,
    #[serde(default = "default_confidence")]
    pub default_confidence: f64,
}

fn default_periods() -> u32 {
    12
}
fn default_confidence() -> f64 {
    0.95
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            default_periods: default_periods(),
            default_confidence: default_confidence(),
        }
    }
}

/// Risk assessment configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RiskConfig {
    /// Behaviour when market or operational health is not supplied
    #[serde(default)]
    pub missing_market_data: MarketDataPolicy,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that configured defaults are usable
    pub fn validate(&self) -> anyhow::Result<()> {
        let periods = self.forecast.default_periods;
        if !(MIN_FORECAST_PERIODS..=MAX_FORECAST_PERIODS).contains(&periods) {
            anyhow::bail!(
                "forecast.default_periods must be in [{MIN_FORECAST_PERIODS}, {MAX_FORECAST_PERIODS}], got {periods}"
            );
        }
        let confidence = self.forecast.default_confidence;
        if !(MIN_CONFIDENCE_LEVEL..=MAX_CONFIDENCE_LEVEL).contains(&confidence) {
            anyhow::bail!(
                "forecast.default_confidence must be in [{MIN_CONFIDENCE_LEVEL}, {MAX_CONFIDENCE_LEVEL}], got {confidence}"
            );
        }
        Ok(())
    }
}
