//! smb-analytics: Predictive analytics and optimization for small businesses
//!
//! This library provides the core components for:
//! - Cash flow forecasting with trend, yearly seasonality and confidence bands
//! - Profit-maximizing dynamic pricing from demand elasticity
//! - EOQ inventory policy with safety stock and reorder point
//! - Rule-weighted customer churn and lifetime value scoring
//! - Composite business risk assessment
//!
//! Every operation in [`engine`] is a pure, synchronous function of its
//! input and is safe to call concurrently.

pub mod churn;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod forecast;
pub mod inventory;
pub mod pricing;
pub mod risk;
pub mod series;
pub mod telemetry;

pub use engine::{
    assess_risk, assess_risk_with_policy, forecast_cash_flow, optimize_inventory, optimize_price,
    predict_churn,
};
pub use error::{AnalyticsError, Result};
