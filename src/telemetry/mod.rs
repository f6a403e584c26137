//! Telemetry module
//!
//! Structured logging and engine metrics

mod logging;
mod metrics;

pub use logging::{init_logging, LogFormat};
pub use metrics::{describe_metrics, record_computation, Component, Outcome};

use crate::config::TelemetryConfig;

/// Initialize all telemetry subsystems
pub fn init_telemetry(config: &TelemetryConfig) -> anyhow::Result<()> {
    init_logging(&config.log_level, config.format)?;
    describe_metrics();
    Ok(())
}
