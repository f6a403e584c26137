//! Inventory optimization module
//!
//! Economic Order Quantity with a fixed 95% service level safety stock.

mod optimizer;

pub use optimizer::{InventoryOptimizer, SERVICE_LEVEL_Z, STOCKOUT_PROBABILITY};

use crate::series::TimeSeriesPoint;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Inventory optimization request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryInput {
    /// Demand per period (month)
    pub historical_demand: Vec<TimeSeriesPoint>,
    pub lead_time_days: u32,
    pub holding_cost_per_unit: Decimal,
    pub ordering_cost: Decimal,
    #[serde(default)]
    pub stockout_cost: Option<Decimal>,
}

/// Inventory policy and its cost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryResult {
    pub economic_order_quantity: f64,
    pub safety_stock: f64,
    pub reorder_point: f64,
    pub optimal_stock_level: f64,
    pub orders_per_year: f64,
    /// Days between orders, None when there is no demand
    pub reorder_interval_days: Option<u32>,
    pub annual_holding_cost: Decimal,
    pub annual_ordering_cost: Decimal,
    pub total_cost: Decimal,
    pub recommendations: Vec<String>,
}

impl InventoryResult {
    /// Format as table for CLI output
    pub fn format_table(&self) -> String {
        let interval = self
            .reorder_interval_days
            .map(|d| format!("{d} days"))
            .unwrap_or_else(|| "n/a".to_string());
        let mut out = format!(
            r#"
══════════════════════════════════════════════════════
               INVENTORY POLICY
══════════════════════════════════════════════════════
Order Quantity:     {:.2}
Safety Stock:       {:.2}
Reorder Point:      {:.2}
Target Stock:       {:.2}
Orders / Year:      {:.2}
Reorder Interval:   {}

COSTS
───────────────────────────────────────────────────────
Holding:            {:.2}
Ordering:           {:.2}
Total:              {:.2}
───────────────────────────────────────────────────────
"#,
            self.economic_order_quantity,
            self.safety_stock,
            self.reorder_point,
            self.optimal_stock_level,
            self.orders_per_year,
            interval,
            self.annual_holding_cost,
            self.annual_ordering_cost,
            self.total_cost,
        );
        for rec in &self.recommendations {
            out.push_str(&format!("  > {rec}\n"));
        }
        out
    }
}
