//! EOQ-based inventory policy

use rust_decimal::Decimal;
use tracing::debug;

use super::{InventoryInput, InventoryResult};
use crate::error::{AnalyticsError, Result};
use crate::series::{decimal_to_f64, f64_to_decimal, mean, round2, std_dev, values};

/// z-score for a 95% service level
pub const SERVICE_LEVEL_Z: f64 = 1.65;
/// Stockout probability implied by the service level
pub const STOCKOUT_PROBABILITY: f64 = 0.05;
/// Demand periods per year (monthly history)
const PERIODS_PER_YEAR: f64 = 12.0;
/// Days per demand period
const DAYS_PER_PERIOD: f64 = 30.0;
/// Safety stock share of lead-time demand considered high
const HIGH_SAFETY_RATIO: f64 = 0.5;
/// Order size, in periods of demand, considered large
const LARGE_ORDER_PERIODS: f64 = 3.0;

/// Inventory policy optimizer
#[derive(Debug, Clone, Copy, Default)]
pub struct InventoryOptimizer;

impl InventoryOptimizer {
    /// Create a new optimizer
    pub fn new() -> Self {
        Self
    }

    /// Compute order quantity, safety stock, reorder point and annual cost
    pub fn optimize(&self, input: &InventoryInput) -> Result<InventoryResult> {
        validate(input)?;

        let demand = values(&input.historical_demand);
        let holding = decimal_to_f64(input.holding_cost_per_unit);
        let ordering = decimal_to_f64(input.ordering_cost);

        let avg_demand = mean(&demand);
        let demand_std = std_dev(&demand);
        let annual_demand = avg_demand * PERIODS_PER_YEAR;

        // EOQ = sqrt(2DS / H)
        let eoq = if annual_demand > 0.0 {
            (2.0 * annual_demand * ordering / holding).sqrt()
        } else {
            0.0
        };

        let lead_periods = input.lead_time_days as f64 / DAYS_PER_PERIOD;
        let safety_stock = SERVICE_LEVEL_Z * demand_std * lead_periods.sqrt();
        let lead_time_demand = avg_demand * lead_periods;
        let reorder_point = lead_time_demand + safety_stock;
        let optimal_stock_level = reorder_point + eoq / 2.0;

        let orders_per_year = if eoq > 0.0 { annual_demand / eoq } else { 0.0 };
        let reorder_interval_days = (annual_demand > 0.0)
            .then(|| (365.0 * eoq / annual_demand) as u32);

        let annual_holding_cost =
            f64_to_decimal((eoq / 2.0 + safety_stock) * holding, "annual_holding_cost")?;
        let annual_ordering_cost =
            f64_to_decimal(orders_per_year * ordering, "annual_ordering_cost")?;
        let stockout = match input.stockout_cost {
            Some(cost) => f64_to_decimal(
                STOCKOUT_PROBABILITY * decimal_to_f64(cost) * orders_per_year,
                "expected_stockout_cost",
            )?,
            None => Decimal::ZERO,
        };
        let total_cost = annual_holding_cost + annual_ordering_cost + stockout;

        debug!(
            avg_demand,
            demand_std, eoq, safety_stock, reorder_point, "Computed inventory policy"
        );

        let mut recommendations = Vec::new();
        if lead_time_demand > 0.0 && safety_stock / lead_time_demand > HIGH_SAFETY_RATIO {
            recommendations.push(
                "Demand is volatile relative to lead time - consider diversifying suppliers"
                    .to_string(),
            );
        }
        if avg_demand > 0.0 && eoq > avg_demand * LARGE_ORDER_PERIODS {
            recommendations
                .push("Order quantities are large - negotiate volume discounts".to_string());
        }
        if let Some(days) = reorder_interval_days {
            recommendations.push(format!("Order {} units every {days} days", eoq as u64));
        }
        recommendations.push(format!(
            "Reorder when stock falls to {} units",
            reorder_point as u64
        ));

        Ok(InventoryResult {
            economic_order_quantity: round2(eoq),
            safety_stock: round2(safety_stock),
            reorder_point: round2(reorder_point),
            optimal_stock_level: round2(optimal_stock_level),
            orders_per_year: round2(orders_per_year),
            reorder_interval_days,
            annual_holding_cost,
            annual_ordering_cost,
            total_cost,
            recommendations,
        })
    }
}

fn validate(input: &InventoryInput) -> Result<()> {
    if input.holding_cost_per_unit <= Decimal::ZERO {
        return Err(AnalyticsError::validation(
            "holding_cost_per_unit must be positive",
        ));
    }
    if input.ordering_cost <= Decimal::ZERO {
        return Err(AnalyticsError::validation("ordering_cost must be positive"));
    }
    if matches!(input.stockout_cost, Some(c) if c < Decimal::ZERO) {
        return Err(AnalyticsError::validation(
            "stockout_cost must not be negative",
        ));
    }
    if input.historical_demand.is_empty() {
        return Err(AnalyticsError::validation("historical_demand is empty"));
    }
    if input
        .historical_demand
        .iter()
        .any(|p| !p.value.is_finite() || p.value < 0.0)
    {
        return Err(AnalyticsError::validation(
            "demand values must be finite and non-negative",
        ));
    }
    Ok(())
}
