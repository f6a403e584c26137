//! Property-based tests for engine invariants

use crate::monthly;
use proptest::prelude::*;
use rust_decimal::Decimal;
use smb_analytics::churn::CustomerFeatures;
use smb_analytics::inventory::InventoryInput;
use smb_analytics::pricing::PricingInput;
use smb_analytics::risk::{FinancialRatios, MarketData, RiskInput};
use smb_analytics::{
    assess_risk, forecast_cash_flow, optimize_inventory, optimize_price, predict_churn,
};

fn cents_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..100_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn demand_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.0f64..10_000.0, 1..36)
}

fn customer_strategy() -> impl Strategy<Value = CustomerFeatures> {
    (
        0u32..1000,
        0u32..200,
        0i64..1_000_000,
        0.0f64..100.0,
        0u32..3650,
    )
        .prop_map(|(recency, count, cents, engagement, age)| CustomerFeatures {
            customer_id: "prop".to_string(),
            recency_days: recency,
            purchase_count: count,
            total_spent: Decimal::new(cents, 2),
            engagement_score: engagement,
            customer_age_days: age,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn forecast_bands_are_ordered(
        values in prop::collection::vec(-50_000.0f64..50_000.0, 2..40),
        periods in 1u32..=60,
        confidence in 0.8f64..=0.99,
    ) {
        let result = forecast_cash_flow(&monthly(&values), periods, confidence).unwrap();
        prop_assert_eq!(result.forecast.len(), periods as usize);
        prop_assert!((0.0..=100.0).contains(&result.risk_score));
        for point in &result.forecast {
            prop_assert!(point.lower_bound <= point.predicted_value);
            prop_assert!(point.predicted_value <= point.upper_bound);
        }
    }

    #[test]
    fn price_never_below_floor(
        cost in cents_strategy(),
        current in cents_strategy(),
        demand in demand_strategy(),
        elasticity in prop::option::of(-5.0f64..-0.1),
    ) {
        let input = PricingInput {
            current_price: current,
            unit_cost: cost,
            competitor_prices: vec![current],
            historical_demand: monthly(&demand),
            elasticity,
        };
        let result = optimize_price(&input).unwrap();
        prop_assert!(result.optimal_price >= cost * Decimal::new(11, 1));
        prop_assert!((0.0..=1.0).contains(&result.confidence_score));
        prop_assert!(result.expected_units >= 0.0);
    }

    #[test]
    fn inventory_is_deterministic(
        demand in demand_strategy(),
        lead_time_days in 0u32..120,
        holding in cents_strategy(),
        ordering in cents_strategy(),
    ) {
        let input = InventoryInput {
            historical_demand: monthly(&demand),
            lead_time_days,
            holding_cost_per_unit: holding,
            ordering_cost: ordering,
            stockout_cost: None,
        };
        let first = optimize_inventory(&input).unwrap();
        let second = optimize_inventory(&input).unwrap();
        prop_assert!(first.reorder_point >= first.safety_stock);
        prop_assert!(first.total_cost >= Decimal::ZERO);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn churn_probability_is_bounded(customer in customer_strategy()) {
        let results = predict_churn(&[customer]);
        prop_assert_eq!(results.len(), 1);
        prop_assert!((0.0..=0.95).contains(&results[0].churn_probability));
        prop_assert!(results[0].lifetime_value_prediction >= Decimal::ZERO);
    }

    #[test]
    fn risk_scores_are_bounded(
        current_ratio in 0.0f64..5.0,
        debt_to_equity in 0.0f64..6.0,
        profit_margin in -1.0f64..1.0,
        market in 0.0f64..=100.0,
        operational in 0.0f64..=100.0,
    ) {
        let input = RiskInput {
            financial: FinancialRatios { current_ratio, debt_to_equity, profit_margin },
            market_data: Some(MarketData {
                market_score: Some(market),
                operational_score: Some(operational),
            }),
        };
        let result = assess_risk(&input).unwrap();
        for score in [
            result.overall_risk_score,
            result.financial_health_score,
            result.market_risk_score,
            result.operational_risk_score,
        ] {
            prop_assert!((0.0..=100.0).contains(&score));
        }
    }
}
