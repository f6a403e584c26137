//! Inventory command implementation

use clap::Args;
use std::path::PathBuf;

use super::{read_request, render, OutputFormat};
use crate::engine;
use crate::inventory::InventoryInput;

#[derive(Args, Debug)]
pub struct InventoryArgs {
    /// JSON file with the inventory request
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

impl InventoryArgs {
    pub fn execute(&self) -> anyhow::Result<String> {
        let request: InventoryInput = read_request(&self.input)?;
        tracing::info!(
            demand_points = request.historical_demand.len(),
            lead_time_days = request.lead_time_days,
            "Optimizing inventory"
        );
        let result = engine::optimize_inventory(&request)?;
        render(self.format, &result, || result.format_table())
    }
}
