//! Profit-maximizing price derivation

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use tracing::{debug, warn};

use super::elasticity::{
    estimate_elasticity, DEFAULT_ELASTICITY, MAX_ELASTICITY, MIN_ELASTICITY,
};
use super::{ElasticitySource, PricingInput, PricingResult};
use crate::error::{AnalyticsError, Result};
use crate::series::{decimal_to_f64, f64_to_decimal, mean, round2, round3, values};

/// Minimum price as a multiple of unit cost
const MIN_MARGIN: Decimal = dec!(1.1);
/// Markup used when demand is inelastic
const INELASTIC_MARKUP: f64 = 1.5;
/// Position above which we are considered overpriced
const OVERPRICED_POSITION: f64 = 1.2;
/// Position below which we are considered underpriced
const UNDERPRICED_POSITION: f64 = 0.8;
/// Position below which premium positioning is suggested
const BELOW_MARKET_POSITION: f64 = 0.9;
/// Competitive adjustment applied to the optimal price
const POSITION_ADJUSTMENT: f64 = 0.05;
/// Relative price move worth calling out
const SIGNIFICANT_CHANGE: f64 = 0.1;

/// Dynamic pricing optimizer
#[derive(Debug, Clone, Copy, Default)]
pub struct DynamicPricingEngine;

impl DynamicPricingEngine {
    /// Create a new pricing engine
    pub fn new() -> Self {
        Self
    }

    /// Derive the optimal price for a product
    pub fn optimize(&self, input: &PricingInput) -> Result<PricingResult> {
        validate(input)?;

        let demand = values(&input.historical_demand);
        let (elasticity, source) = match input.elasticity {
            Some(e) => (e, ElasticitySource::Supplied),
            None => match estimate_elasticity(&demand) {
                Ok(e) => (e, ElasticitySource::Estimated),
                Err(err) => {
                    warn!(error = %err, "Falling back to default elasticity");
                    (DEFAULT_ELASTICITY, ElasticitySource::Default)
                }
            },
        };

        let current_price = decimal_to_f64(input.current_price);
        let unit_cost = decimal_to_f64(input.unit_cost);

        let competitor_position = if input.competitor_prices.is_empty() {
            1.0
        } else {
            let competitors: Vec<f64> = input
                .competitor_prices
                .iter()
                .map(|p| decimal_to_f64(*p))
                .collect();
            current_price / mean(&competitors)
        };

        // Lerner rule P* = MC / (1 + 1/e) only holds for elastic demand
        let mut optimal = if elasticity.abs() > 1.0 {
            unit_cost / (1.0 + 1.0 / elasticity)
        } else {
            unit_cost * INELASTIC_MARKUP
        };

        if competitor_position > OVERPRICED_POSITION {
            optimal *= 1.0 - POSITION_ADJUSTMENT;
        } else if competitor_position < UNDERPRICED_POSITION {
            optimal *= 1.0 + POSITION_ADJUSTMENT;
        }

        let floor = (input.unit_cost * MIN_MARGIN)
            .round_dp_with_strategy(2, RoundingStrategy::ToPositiveInfinity);
        let optimal_price = f64_to_decimal(optimal, "optimal_price")?.max(floor);

        let optimal_f = decimal_to_f64(optimal_price);
        let price_change = (optimal_f - current_price) / current_price;
        let avg_demand = mean(&demand);
        let expected_units = (avg_demand * (1.0 + elasticity * price_change)).max(0.0);
        let expected_revenue = f64_to_decimal(optimal_f * expected_units, "expected_revenue")?;

        let current_revenue = current_price * avg_demand;
        let revenue_impact_pct = if current_revenue > 0.0 {
            round2((decimal_to_f64(expected_revenue) - current_revenue) / current_revenue * 100.0)
        } else {
            0.0
        };

        debug!(
            elasticity,
            competitor_position,
            optimal = %optimal_price,
            price_change,
            "Priced product"
        );

        Ok(PricingResult {
            optimal_price,
            expected_revenue,
            expected_units: round2(expected_units),
            elasticity: round3(elasticity),
            elasticity_source: source,
            revenue_impact_pct,
            competitor_position: round2(competitor_position),
            confidence_score: confidence_for(source),
            recommendations: recommendations(price_change, elasticity, competitor_position),
        })
    }
}

fn validate(input: &PricingInput) -> Result<()> {
    if input.current_price <= Decimal::ZERO {
        return Err(AnalyticsError::validation("current_price must be positive"));
    }
    if input.unit_cost <= Decimal::ZERO {
        return Err(AnalyticsError::validation("unit_cost must be positive"));
    }
    if input.competitor_prices.iter().any(|p| *p <= Decimal::ZERO) {
        return Err(AnalyticsError::validation(
            "competitor prices must be positive",
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
    if let Some(e) = input.elasticity {
        if !(MIN_ELASTICITY..=MAX_ELASTICITY).contains(&e) {
            return Err(AnalyticsError::validation(format!(
                "elasticity must be in [{MIN_ELASTICITY}, {MAX_ELASTICITY}], got {e}"
            )));
        }
    }
    Ok(())
}

fn confidence_for(source: ElasticitySource) -> f64 {
    match source {
        ElasticitySource::Supplied | ElasticitySource::Estimated => 0.85,
        ElasticitySource::Default => 0.6,
    }
}

fn recommendations(price_change: f64, elasticity: f64, position: f64) -> Vec<String> {
    let mut recs = Vec::new();

    if price_change.abs() > SIGNIFICANT_CHANGE {
        let direction = if price_change > 0.0 { "Raise" } else { "Lower" };
        recs.push(format!(
            "{direction} price by {:.1}%",
            price_change.abs() * 100.0
        ));
    }

    if elasticity < -1.0 {
        recs.push(
            "Demand is elastic - modest price cuts can lift volume substantially".to_string(),
        );
    } else {
        recs.push("Demand is inelastic - there is room to exercise pricing power".to_string());
    }

    if position < BELOW_MARKET_POSITION {
        recs.push("Priced below the market - consider premium positioning".to_string());
    } else if position > OVERPRICED_POSITION {
        recs.push(
            "Priced well above competitors - make the differentiation visible to customers"
                .to_string(),
        );
    }

    recs
}
