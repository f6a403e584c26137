//! Rule-weighted churn scoring

use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::types::{ChurnResult, CustomerFeatures, RiskLevel};
use crate::series::{decimal_to_f64, f64_to_decimal, round3};

/// Churn is never reported as certain
pub const MAX_CHURN_PROBABILITY: f64 = 0.95;
/// Expected relationship length for a customer with zero churn risk
const BASE_LIFETIME_MONTHS: f64 = 24.0;

/// Weighted churn rules
const LAPSED_DAYS: u32 = 90;
const LAPSED_WEIGHT: f64 = 0.4;
const COOLING_DAYS: u32 = 60;
const COOLING_WEIGHT: f64 = 0.2;
const FEW_PURCHASES: u32 = 2;
const FEW_PURCHASES_WEIGHT: f64 = 0.3;
const LOW_SPEND: Decimal = Decimal::ONE_HUNDRED;
const LOW_SPEND_WEIGHT: f64 = 0.2;
const LOW_ENGAGEMENT: f64 = 30.0;
const LOW_ENGAGEMENT_WEIGHT: f64 = 0.3;

/// Customer churn predictor
#[derive(Debug, Clone, Copy, Default)]
pub struct ChurnPredictor;

impl ChurnPredictor {
    /// Create a new predictor
    pub fn new() -> Self {
        Self
    }

    /// Score every customer in the batch, preserving order
    pub fn predict(&self, customers: &[CustomerFeatures]) -> Vec<ChurnResult> {
        customers.iter().map(|c| self.score(c)).collect()
    }

    /// Score a single customer
    pub fn score(&self, customer: &CustomerFeatures) -> ChurnResult {
        let churn_probability = churn_probability(customer);
        let risk_level = RiskLevel::from_probability(churn_probability);
        let ltv = lifetime_value(customer, churn_probability);
        let lifetime_value_prediction =
            f64_to_decimal(ltv, "lifetime_value").unwrap_or_else(|err| {
                // ltv is non-negative, so the only failure is overflow
                warn!(
                    customer_id = %customer.customer_id,
                    error = %err,
                    "Saturating lifetime value"
                );
                Decimal::MAX
            });

        debug!(
            customer_id = %customer.customer_id,
            churn_probability,
            %risk_level,
            "Scored customer"
        );

        ChurnResult {
            customer_id: customer.customer_id.clone(),
            churn_probability: round3(churn_probability),
            risk_level,
            lifetime_value_prediction,
            recommendations: recommendations(customer, churn_probability),
        }
    }
}

fn churn_probability(customer: &CustomerFeatures) -> f64 {
    let mut score = 0.0;

    if customer.recency_days > LAPSED_DAYS {
        score += LAPSED_WEIGHT;
    } else if customer.recency_days > COOLING_DAYS {
        score += COOLING_WEIGHT;
    }
    if customer.purchase_count < FEW_PURCHASES {
        score += FEW_PURCHASES_WEIGHT;
    }
    if customer.total_spent < LOW_SPEND {
        score += LOW_SPEND_WEIGHT;
    }
    if customer.engagement_score < LOW_ENGAGEMENT {
        score += LOW_ENGAGEMENT_WEIGHT;
    }

    score.min(MAX_CHURN_PROBABILITY)
}

/// avg order value * monthly frequency * expected remaining months
fn lifetime_value(customer: &CustomerFeatures, churn_probability: f64) -> f64 {
    if customer.purchase_count == 0 {
        return 0.0;
    }
    let purchases = customer.purchase_count as f64;
    let avg_order_value = decimal_to_f64(customer.total_spent) / purchases;
    let tenure_months = (customer.customer_age_days as f64 / 30.0).max(1.0);
    let monthly_frequency = purchases / tenure_months;
    let remaining_months = BASE_LIFETIME_MONTHS * (1.0 - churn_probability);

    (avg_order_value * monthly_frequency * remaining_months).max(0.0)
}

fn recommendations(customer: &CustomerFeatures, churn_probability: f64) -> Vec<String> {
    let mut recs = Vec::new();
    if churn_probability > 0.5 {
        recs.push("Send a personalized win-back email campaign".to_string());
        recs.push("Offer an exclusive discount or loyalty reward".to_string());
    }
    if customer.recency_days > COOLING_DAYS {
        recs.push("Trigger the re-engagement workflow".to_string());
    }
    if customer.purchase_count < 3 {
        recs.push("Provide onboarding support to deepen product adoption".to_string());
    }
    if customer.engagement_score < 40.0 {
        recs.push("Offer personalized product recommendations".to_string());
    }
    recs
}
