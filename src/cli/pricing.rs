//! Pricing command implementation

use clap::Args;
use std::path::PathBuf;

use super::{read_request, render, OutputFormat};
use crate::engine;
use crate::pricing::PricingInput;

#[derive(Args, Debug)]
pub struct PricingArgs {
    /// JSON file with the pricing request
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

impl PricingArgs {
    pub fn execute(&self) -> anyhow::Result<String> {
        let request: PricingInput = read_request(&self.input)?;
        tracing::info!(
            demand_points = request.historical_demand.len(),
            competitors = request.competitor_prices.len(),
            "Optimizing price"
        );
        let result = engine::optimize_price(&request)?;
        render(self.format, &result, || result.format_table())
    }
}
