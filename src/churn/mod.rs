//! Customer churn module
//!
//! Rule-weighted churn probability and lifetime value per customer.

mod predictor;
mod types;

pub use predictor::{ChurnPredictor, MAX_CHURN_PROBABILITY};
pub use types::{ChurnResult, ChurnSummary, CustomerFeatures, RiskLevel};
