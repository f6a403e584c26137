//! Engine operations
//!
//! One synchronous, stateless entry point per component. Each call is
//! timed and counted; inputs are never retained between calls.

use std::time::Instant;

use tracing::{debug, warn};

use crate::churn::{ChurnPredictor, ChurnResult, CustomerFeatures};
use crate::error::{AnalyticsError, Result};
use crate::forecast::{CashFlowPredictor, ForecastResult};
use crate::inventory::{InventoryInput, InventoryOptimizer, InventoryResult};
use crate::pricing::{DynamicPricingEngine, PricingInput, PricingResult};
use crate::risk::{MarketDataPolicy, RiskAssessor, RiskInput, RiskResult};
use crate::series::TimeSeriesPoint;
use crate::telemetry::{record_computation, Component, Outcome};

/// Forecast a monthly cash flow series `periods` months ahead
pub fn forecast_cash_flow(
    series: &[TimeSeriesPoint],
    periods: u32,
    confidence_level: f64,
) -> Result<ForecastResult> {
    observe(Component::CashFlow, || {
        CashFlowPredictor::new().forecast(series, periods, confidence_level)
    })
}

/// Derive the profit-maximizing price
pub fn optimize_price(input: &PricingInput) -> Result<PricingResult> {
    observe(Component::Pricing, || DynamicPricingEngine::new().optimize(input))
}

/// Derive the EOQ inventory policy
pub fn optimize_inventory(input: &InventoryInput) -> Result<InventoryResult> {
    observe(Component::Inventory, || InventoryOptimizer::new().optimize(input))
}

/// Score churn risk and lifetime value for each customer
pub fn predict_churn(customers: &[CustomerFeatures]) -> Vec<ChurnResult> {
    let start = Instant::now();
    let results = ChurnPredictor::new().predict(customers);
    record_computation(Component::Churn, Outcome::Ok, start.elapsed());
    results
}

/// Assess business risk, estimating missing market data
pub fn assess_risk(input: &RiskInput) -> Result<RiskResult> {
    assess_risk_with_policy(input, MarketDataPolicy::default())
}

/// Assess business risk with an explicit missing-data policy
pub fn assess_risk_with_policy(input: &RiskInput, policy: MarketDataPolicy) -> Result<RiskResult> {
    observe(Component::Risk, || RiskAssessor::new(policy).assess(input))
}

fn observe<T>(component: Component, compute: impl FnOnce() -> Result<T>) -> Result<T> {
    let start = Instant::now();
    let result = compute();

    let outcome = match &result {
        Ok(_) => Outcome::Ok,
        Err(err @ AnalyticsError::Validation(_)) => {
            debug!(component = component.as_str(), error = %err, "Rejected input");
            Outcome::ValidationError
        }
        Err(err @ AnalyticsError::Computation(_)) => {
            warn!(component = component.as_str(), error = %err, "Computation failed");
            Outcome::ComputationError
        }
    };
    record_computation(component, outcome, start.elapsed());

    result
}
