//! Risk command implementation

use clap::Args;
use std::path::PathBuf;

use super::{read_request, render, OutputFormat};
use crate::config::Config;
use crate::engine;
use crate::risk::RiskInput;

#[derive(Args, Debug)]
pub struct RiskArgs {
    /// JSON file with `financial_data` and optional `market_data`
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

impl RiskArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<String> {
        let request: RiskInput = read_request(&self.input)?;
        tracing::info!(
            has_market_data = request.market_data.is_some(),
            "Assessing business risk"
        );
        let result =
            engine::assess_risk_with_policy(&request, config.risk.missing_market_data)?;
        render(self.format, &result, || result.format_table())
    }
}
