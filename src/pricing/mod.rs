//! Dynamic pricing module
//!
//! Profit-maximizing price from demand elasticity, adjusted for the
//! competitive position and protected by a minimum margin.

mod elasticity;
mod engine;

pub use elasticity::{estimate_elasticity, DEFAULT_ELASTICITY, MAX_ELASTICITY, MIN_ELASTICITY};
pub use engine::DynamicPricingEngine;

use crate::series::TimeSeriesPoint;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Pricing optimization request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingInput {
    pub current_price: Decimal,
    #[serde(alias = "cost")]
    pub unit_cost: Decimal,
    #[serde(default)]
    pub competitor_prices: Vec<Decimal>,
    pub historical_demand: Vec<TimeSeriesPoint>,
    /// Known price elasticity; estimated from demand when absent
    #[serde(default)]
    pub elasticity: Option<f64>,
}

/// Where the elasticity used for pricing came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElasticitySource {
    /// Provided by the caller
    Supplied,
    /// Estimated from demand volatility
    Estimated,
    /// Estimation was degenerate, fallback used
    Default,
}

/// Pricing optimization outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    pub optimal_price: Decimal,
    pub expected_revenue: Decimal,
    pub expected_units: f64,
    pub elasticity: f64,
    pub elasticity_source: ElasticitySource,
    /// Expected revenue vs current revenue, percent
    pub revenue_impact_pct: f64,
    /// Current price / mean competitor price (1.0 without competitors)
    pub competitor_position: f64,
    pub confidence_score: f64,
    pub recommendations: Vec<String>,
}

impl PricingResult {
    /// Format as table for CLI output
    pub fn format_table(&self) -> String {
        let mut out = format!(
            r#"
══════════════════════════════════════════════════════
               PRICING OPTIMIZATION
══════════════════════════════════════════════════════
Optimal Price:      {:.2}
Expected Units:     {:.2}
Expected Revenue:   {:.2}
Revenue Impact:     {:+.2}%
Elasticity:         {:.3} ({:?})
Market Position:    {:.2}
Confidence:         {:.2}
───────────────────────────────────────────────────────
"#,
            self.optimal_price,
            self.expected_units,
            self.expected_revenue,
            self.revenue_impact_pct,
            self.elasticity,
            self.elasticity_source,
            self.competitor_position,
            self.confidence_score,
        );
        for rec in &self.recommendations {
            out.push_str(&format!("  > {rec}\n"));
        }
        out
    }
}
