//! Churn types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::series::{mean, round3};

/// Behavioral features for one customer
///
/// Missing fields take neutral defaults so partially populated CRM records
/// can still be scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerFeatures {
    #[serde(default = "default_customer_id")]
    pub customer_id: String,
    #[serde(default = "default_recency", alias = "days_since_last_purchase")]
    pub recency_days: u32,
    #[serde(default)]
    pub purchase_count: u32,
    #[serde(default)]
    pub total_spent: Decimal,
    /// 0-100
    #[serde(default = "default_engagement")]
    pub engagement_score: f64,
    #[serde(default = "default_customer_age")]
    pub customer_age_days: u32,
}

fn default_customer_id() -> String {
    "unknown".to_string()
}
fn default_recency() -> u32 {
    30
}
fn default_engagement() -> f64 {
    50.0
}
fn default_customer_age() -> u32 {
    365
}

impl Default for CustomerFeatures {
    fn default() -> Self {
        Self {
            customer_id: default_customer_id(),
            recency_days: default_recency(),
            purchase_count: 0,
            total_spent: Decimal::ZERO,
            engagement_score: default_engagement(),
            customer_age_days: default_customer_age(),
        }
    }
}

/// Churn risk bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Bucket a churn probability
    pub fn from_probability(p: f64) -> Self {
        if p > 0.7 {
            RiskLevel::High
        } else if p > 0.4 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "LOW"),
            RiskLevel::Medium => write!(f, "MEDIUM"),
            RiskLevel::High => write!(f, "HIGH"),
        }
    }
}

/// Churn prediction for one customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChurnResult {
    pub customer_id: String,
    pub churn_probability: f64,
    pub risk_level: RiskLevel,
    pub lifetime_value_prediction: Decimal,
    pub recommendations: Vec<String>,
}

/// Aggregate view over a batch of predictions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChurnSummary {
    pub total_customers: usize,
    pub high_risk: usize,
    pub medium_risk: usize,
    pub low_risk: usize,
    pub avg_churn_probability: f64,
    /// Lifetime value held by HIGH and MEDIUM risk customers
    pub total_at_risk_ltv: Decimal,
}

impl ChurnSummary {
    /// Summarize a batch of predictions
    pub fn from_results(results: &[ChurnResult]) -> Self {
        let count = |level: RiskLevel| results.iter().filter(|r| r.risk_level == level).count();
        let probabilities: Vec<f64> = results.iter().map(|r| r.churn_probability).collect();

        Self {
            total_customers: results.len(),
            high_risk: count(RiskLevel::High),
            medium_risk: count(RiskLevel::Medium),
            low_risk: count(RiskLevel::Low),
            avg_churn_probability: round3(mean(&probabilities)),
            total_at_risk_ltv: results
                .iter()
                .filter(|r| r.risk_level != RiskLevel::Low)
                .fold(Decimal::ZERO, |total, r| {
                    total.saturating_add(r.lifetime_value_prediction)
                }),
        }
    }

    /// Format as table for CLI output
    pub fn format_table(&self) -> String {
        format!(
            r#"
══════════════════════════════════════════════════════
               CHURN SUMMARY
══════════════════════════════════════════════════════
Customers:          {}
High Risk:          {}
Medium Risk:        {}
Low Risk:           {}
Avg Churn Prob:     {:.3}
At-Risk LTV:        {:.2}
══════════════════════════════════════════════════════
"#,
            self.total_customers,
            self.high_risk,
            self.medium_risk,
            self.low_risk,
            self.avg_churn_probability,
            self.total_at_risk_ltv,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn result(p: f64, ltv: Decimal) -> ChurnResult {
        ChurnResult {
            customer_id: "c".to_string(),
            churn_probability: p,
            risk_level: RiskLevel::from_probability(p),
            lifetime_value_prediction: ltv,
            recommendations: vec![],
        }
    }

    #[test]
    fn test_risk_level_thresholds() {
        assert_eq!(RiskLevel::from_probability(0.95), RiskLevel::High);
        assert_eq!(RiskLevel::from_probability(0.7), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_probability(0.41), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_probability(0.4), RiskLevel::Low);
        assert_eq!(RiskLevel::from_probability(0.0), RiskLevel::Low);
    }

    #[test]
    fn test_defaults_from_sparse_record() {
        let features: CustomerFeatures = serde_json::from_str("{}").unwrap();
        assert_eq!(features, CustomerFeatures::default());
        assert_eq!(features.customer_id, "unknown");
        assert_eq!(features.recency_days, 30);
    }

    #[test]
    fn test_recency_alias() {
        let features: CustomerFeatures =
            serde_json::from_str(r#"{"customer_id": "c-1", "days_since_last_purchase": 75}"#)
                .unwrap();
        assert_eq!(features.recency_days, 75);
    }

    #[test]
    fn test_risk_level_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&RiskLevel::High).unwrap(), "\"HIGH\"");
    }

    #[test]
    fn test_summary() {
        let results = vec![
            result(0.95, dec!(10)),
            result(0.5, dec!(20)),
            result(0.2, dec!(100)),
        ];
        let summary = ChurnSummary::from_results(&results);

        assert_eq!(summary.total_customers, 3);
        assert_eq!(summary.high_risk, 1);
        assert_eq!(summary.medium_risk, 1);
        assert_eq!(summary.low_risk, 1);
        assert_eq!(summary.avg_churn_probability, 0.55);
        assert_eq!(summary.total_at_risk_ltv, dec!(30));
    }

    #[test]
    fn test_summary_ltv_saturates() {
        let results = vec![result(0.95, Decimal::MAX), result(0.6, Decimal::MAX)];
        let summary = ChurnSummary::from_results(&results);
        assert_eq!(summary.total_at_risk_ltv, Decimal::MAX);
    }

    #[test]
    fn test_empty_summary() {
        let summary = ChurnSummary::from_results(&[]);
        assert_eq!(summary, ChurnSummary::default());
    }
}
