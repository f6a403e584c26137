//! CLI interface for smb-analytics
//!
//! Batch driver over the engine operations. Each subcommand reads a JSON
//! request file and prints the result as JSON or a table:
//! - `forecast`: Cash flow forecast
//! - `pricing`: Price optimization
//! - `inventory`: Inventory policy
//! - `churn`: Customer churn scoring
//! - `risk`: Business risk assessment
//! - `config`: Show effective configuration

mod churn;
mod forecast;
mod inventory;
mod pricing;
mod risk;

pub use churn::ChurnArgs;
pub use forecast::ForecastArgs;
pub use inventory::InventoryArgs;
pub use pricing::PricingArgs;
pub use risk::RiskArgs;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

#[derive(Parser, Debug)]
#[command(name = "smb-analytics")]
#[command(about = "Predictive analytics for small-business cash flow, pricing, inventory, churn and risk")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Forecast monthly cash flow
    Forecast(ForecastArgs),
    /// Optimize a product price
    Pricing(PricingArgs),
    /// Compute an inventory reorder policy
    Inventory(InventoryArgs),
    /// Score customer churn risk
    Churn(ChurnArgs),
    /// Assess overall business risk
    Risk(RiskArgs),
    /// Show effective configuration
    Config,
}

/// Result output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Table,
}

/// Read and parse a JSON request file
pub(crate) fn read_request<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read request {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Invalid request in {}", path.display()))
}

/// Render a result in the requested format
pub(crate) fn render<T: Serialize>(
    format: OutputFormat,
    value: &T,
    table: impl FnOnce() -> String,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => Ok(table()),
    }
}
