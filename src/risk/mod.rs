//! Business risk assessment module
//!
//! Composes financial ratios with market and operational health into an
//! overall 0-100 risk score.

mod assessment;
mod types;

pub use assessment::{
    RiskAssessor, PLACEHOLDER_MARKET_HEALTH, PLACEHOLDER_OPERATIONAL_HEALTH,
};
pub use types::{
    FinancialRatios, MarketData, MarketDataPolicy, RiskFactor, RiskInput, RiskResult, Severity,
};
