//! Integration tests for churn prediction

use rust_decimal_macros::dec;
use smb_analytics::churn::{ChurnSummary, CustomerFeatures, RiskLevel};
use smb_analytics::predict_churn;

#[test]
fn test_lapsed_customer_is_high_risk() {
    let customer = CustomerFeatures {
        customer_id: "c-42".to_string(),
        recency_days: 120,
        purchase_count: 0,
        total_spent: dec!(0),
        engagement_score: 10.0,
        customer_age_days: 400,
    };
    let results = predict_churn(&[customer]);

    assert_eq!(results.len(), 1);
    assert!(results[0].churn_probability >= 0.9);
    assert!(results[0].churn_probability <= 0.95);
    assert_eq!(results[0].risk_level, RiskLevel::High);
}

#[test]
fn test_batch_from_sparse_json() {
    let json = r#"[
        {"customer_id": "a", "days_since_last_purchase": 5, "purchase_count": 20, "total_spent": 2400, "engagement_score": 85},
        {"customer_id": "b"},
        {}
    ]"#;
    let customers: Vec<CustomerFeatures> = serde_json::from_str(json).unwrap();
    let results = predict_churn(&customers);

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].risk_level, RiskLevel::Low);
    assert!(results[0].lifetime_value_prediction > dec!(0));
    assert_eq!(results[2].customer_id, "unknown");

    let summary = ChurnSummary::from_results(&results);
    assert_eq!(summary.total_customers, 3);
    assert_eq!(summary.high_risk + summary.medium_risk + summary.low_risk, 3);
}
