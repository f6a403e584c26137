//! Churn command implementation

use clap::Args;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::{read_request, render, OutputFormat};
use crate::churn::{ChurnResult, ChurnSummary, CustomerFeatures};
use crate::engine;

#[derive(Args, Debug)]
pub struct ChurnArgs {
    /// JSON file with a `customers` array
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

#[derive(Debug, Deserialize)]
struct ChurnRequest {
    customers: Vec<CustomerFeatures>,
}

#[derive(Debug, Serialize)]
struct ChurnReport {
    predictions: Vec<ChurnResult>,
    summary: ChurnSummary,
}

impl ChurnArgs {
    pub fn execute(&self) -> anyhow::Result<String> {
        let request: ChurnRequest = read_request(&self.input)?;
        tracing::info!(customers = request.customers.len(), "Predicting churn");

        let predictions = engine::predict_churn(&request.customers);
        let summary = ChurnSummary::from_results(&predictions);
        let report = ChurnReport {
            predictions,
            summary,
        };

        render(self.format, &report, || {
            let mut out = String::new();
            for p in &report.predictions {
                out.push_str(&format!(
                    "{:<20} {:>6.3} {:<6} LTV {:>10.2}\n",
                    p.customer_id,
                    p.churn_probability,
                    p.risk_level.to_string(),
                    p.lifetime_value_prediction
                ));
            }
            out.push_str(&report.summary.format_table());
            out
        })
    }
}
