//! Integration tests for dynamic pricing

use crate::monthly;
use rust_decimal_macros::dec;
use smb_analytics::optimize_price;
use smb_analytics::pricing::{ElasticitySource, PricingInput};

fn request() -> PricingInput {
    PricingInput {
        current_price: dec!(10),
        unit_cost: dec!(10),
        competitor_prices: vec![dec!(10), dec!(10), dec!(10)],
        historical_demand: monthly(&[120.0, 110.0, 130.0, 125.0]),
        elasticity: Some(-2.0),
    }
}

#[test]
fn test_price_floor_respected() {
    let result = optimize_price(&request()).unwrap();
    assert!(result.optimal_price >= dec!(10) * dec!(1.1));
    // Elastic markup: 10 / (1 - 1/2)
    assert_eq!(result.optimal_price, dec!(20));
}

#[test]
fn test_estimates_elasticity_from_history() {
    let mut req = request();
    req.elasticity = None;
    let result = optimize_price(&req).unwrap();

    assert_eq!(result.elasticity_source, ElasticitySource::Estimated);
    assert!(result.elasticity < -1.0 && result.elasticity >= -5.0);
    assert!((0.0..=1.0).contains(&result.confidence_score));
}

#[test]
fn test_rejects_non_positive_inputs() {
    let mut req = request();
    req.unit_cost = dec!(0);
    assert!(optimize_price(&req).unwrap_err().is_validation());

    let mut req = request();
    req.current_price = dec!(-3);
    assert!(optimize_price(&req).unwrap_err().is_validation());

    let mut req = request();
    req.historical_demand.clear();
    assert!(optimize_price(&req).unwrap_err().is_validation());
}

#[test]
fn test_request_from_json() {
    let json = r#"{
        "current_price": 24.99,
        "cost": 12.5,
        "competitor_prices": [22.0, 27.5],
        "historical_demand": [
            {"date": "2024-01-01", "value": 310},
            {"date": "2024-02-01", "value": 290},
            {"date": "2024-03-01", "value": 335}
        ]
    }"#;
    let req: PricingInput = serde_json::from_str(json).unwrap();
    assert_eq!(req.unit_cost, dec!(12.5));

    let result = optimize_price(&req).unwrap();
    assert!(result.optimal_price > dec!(0));
    assert!(result.expected_units >= 0.0);
}
