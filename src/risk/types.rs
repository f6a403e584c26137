//! Risk assessment types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Key financial ratios
///
/// Absent ratios default to values of a moderately healthy business.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancialRatios {
    #[serde(default = "default_current_ratio")]
    pub current_ratio: f64,
    #[serde(default = "default_debt_to_equity")]
    pub debt_to_equity: f64,
    #[serde(default = "default_profit_margin")]
    pub profit_margin: f64,
}

fn default_current_ratio() -> f64 {
    1.5
}
fn default_debt_to_equity() -> f64 {
    0.5
}
fn default_profit_margin() -> f64 {
    0.1
}

impl Default for FinancialRatios {
    fn default() -> Self {
        Self {
            current_ratio: default_current_ratio(),
            debt_to_equity: default_debt_to_equity(),
            profit_margin: default_profit_margin(),
        }
    }
}

/// Market and operational health scores (0-100, higher is healthier)
///
/// Resolved by an external market-data integration before the call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketData {
    #[serde(default)]
    pub market_score: Option<f64>,
    #[serde(default)]
    pub operational_score: Option<f64>,
}

/// Risk assessment request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskInput {
    #[serde(default, alias = "financial_data")]
    pub financial: FinancialRatios,
    #[serde(default)]
    pub market_data: Option<MarketData>,
}

/// What to do when market or operational health is not supplied
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketDataPolicy {
    /// Substitute a fixed neutral estimate and flag it in the result
    #[default]
    Estimate,
    /// Fail with a validation error
    Reject,
}

/// Severity of a risk factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Low => write!(f, "LOW"),
            Severity::Medium => write!(f, "MEDIUM"),
            Severity::High => write!(f, "HIGH"),
        }
    }
}

/// A named risk with its severity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub factor: String,
    pub severity: Severity,
    pub description: String,
}

impl RiskFactor {
    pub fn new(factor: &str, severity: Severity, description: &str) -> Self {
        Self {
            factor: factor.to_string(),
            severity,
            description: description.to_string(),
        }
    }
}

/// Risk assessment outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskResult {
    pub overall_risk_score: f64,
    pub financial_health_score: f64,
    pub market_risk_score: f64,
    pub operational_risk_score: f64,
    pub risk_factors: Vec<RiskFactor>,
    pub mitigation_strategies: Vec<String>,
    /// Sub-scores that were estimated rather than supplied
    pub estimated_components: Vec<String>,
}

impl RiskResult {
    /// Format as table for CLI output
    pub fn format_table(&self) -> String {
        let mut out = format!(
            r#"
══════════════════════════════════════════════════════
               BUSINESS RISK ASSESSMENT
══════════════════════════════════════════════════════
Overall Risk:       {:.2}
Financial Health:   {:.2}
Market Risk:        {:.2}
Operational Risk:   {:.2}
───────────────────────────────────────────────────────
"#,
            self.overall_risk_score,
            self.financial_health_score,
            self.market_risk_score,
            self.operational_risk_score,
        );
        if !self.estimated_components.is_empty() {
            out.push_str(&format!(
                "Estimated:          {}\n",
                self.estimated_components.join(", ")
            ));
        }
        for factor in &self.risk_factors {
            out.push_str(&format!(
                "  [{}] {}: {}\n",
                factor.severity, factor.factor, factor.description
            ));
        }
        for strategy in &self.mitigation_strategies {
            out.push_str(&format!("  > {strategy}\n"));
        }
        out
    }
}
