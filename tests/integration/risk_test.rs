//! Integration tests for risk assessment

use smb_analytics::risk::{FinancialRatios, MarketData, MarketDataPolicy, RiskInput};
use smb_analytics::{assess_risk, assess_risk_with_policy};

fn request(current_ratio: f64, debt_to_equity: f64, profit_margin: f64) -> RiskInput {
    RiskInput {
        financial: FinancialRatios {
            current_ratio,
            debt_to_equity,
            profit_margin,
        },
        market_data: Some(MarketData {
            market_score: Some(70.0),
            operational_score: Some(85.0),
        }),
    }
}

#[test]
fn test_distressed_financials_floor_at_zero() {
    let result = assess_risk(&request(0.5, 3.0, -0.1)).unwrap();
    assert_eq!(result.financial_health_score, 0.0);
    // 100 - (0 + 70 + 85) / 3
    assert_eq!(result.overall_risk_score, 48.33);
}

#[test]
fn test_scores_in_range() {
    let result = assess_risk(&request(1.2, 1.8, 0.05)).unwrap();
    for score in [
        result.overall_risk_score,
        result.financial_health_score,
        result.market_risk_score,
        result.operational_risk_score,
    ] {
        assert!((0.0..=100.0).contains(&score));
    }
    assert_eq!(result.risk_factors.len(), 2);
}

#[test]
fn test_missing_market_data_policies() {
    let mut req = request(2.0, 0.4, 0.2);
    req.market_data = None;

    let estimated = assess_risk(&req).unwrap();
    assert_eq!(estimated.estimated_components, vec!["market", "operational"]);

    let rejected = assess_risk_with_policy(&req, MarketDataPolicy::Reject).unwrap_err();
    assert!(rejected.is_validation());
}
