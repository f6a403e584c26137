//! Composite business risk scoring

use tracing::{debug, warn};

use super::types::{
    FinancialRatios, MarketData, MarketDataPolicy, RiskFactor, RiskInput, RiskResult, Severity,
};
use crate::error::{AnalyticsError, Result};
use crate::series::{mean, round2};

/// Market health used when none is supplied (midpoint of 60-90)
pub const PLACEHOLDER_MARKET_HEALTH: f64 = 75.0;
/// Operational health used when none is supplied (midpoint of 70-95)
pub const PLACEHOLDER_OPERATIONAL_HEALTH: f64 = 82.5;

const ILLIQUID_RATIO: f64 = 1.0;
const LOW_LIQUIDITY_RATIO: f64 = 1.5;
const OVERLEVERAGED_RATIO: f64 = 2.0;
const HIGH_LEVERAGE_RATIO: f64 = 1.5;

const ILLIQUID_PENALTY: f64 = 30.0;
const OVERLEVERAGED_PENALTY: f64 = 25.0;
const UNPROFITABLE_PENALTY: f64 = 40.0;

const MITIGATION_STRATEGIES: [&str; 4] = [
    "Tighten working capital management",
    "Diversify revenue streams",
    "Introduce cost control measures",
    "Build strategic cash reserves",
];

/// Business risk assessor
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskAssessor {
    policy: MarketDataPolicy,
}

impl RiskAssessor {
    /// Create an assessor with the given missing-data policy
    pub fn new(policy: MarketDataPolicy) -> Self {
        Self { policy }
    }

    /// Score the business
    pub fn assess(&self, input: &RiskInput) -> Result<RiskResult> {
        let ratios = &input.financial;
        validate_ratios(ratios)?;

        let market = input.market_data.unwrap_or_default();
        let mut estimated_components = Vec::new();
        let market_health = self.resolve(
            market.market_score,
            "market",
            PLACEHOLDER_MARKET_HEALTH,
            &mut estimated_components,
        )?;
        let operational_health = self.resolve(
            market.operational_score,
            "operational",
            PLACEHOLDER_OPERATIONAL_HEALTH,
            &mut estimated_components,
        )?;

        let financial_health = financial_health(ratios);
        let overall = 100.0 - mean(&[financial_health, market_health, operational_health]);

        debug!(
            financial_health,
            market_health, operational_health, overall, "Assessed business risk"
        );

        Ok(RiskResult {
            overall_risk_score: round2(overall),
            financial_health_score: round2(financial_health),
            market_risk_score: round2(100.0 - market_health),
            operational_risk_score: round2(100.0 - operational_health),
            risk_factors: risk_factors(ratios),
            mitigation_strategies: MITIGATION_STRATEGIES.iter().map(|s| s.to_string()).collect(),
            estimated_components,
        })
    }

    fn resolve(
        &self,
        supplied: Option<f64>,
        name: &str,
        placeholder: f64,
        estimated: &mut Vec<String>,
    ) -> Result<f64> {
        match supplied {
            Some(score) if (0.0..=100.0).contains(&score) => Ok(score),
            Some(score) => Err(AnalyticsError::validation(format!(
                "{name}_score must be in [0, 100], got {score}"
            ))),
            None => match self.policy {
                MarketDataPolicy::Estimate => {
                    warn!(component = name, placeholder, "Using estimated health score");
                    estimated.push(name.to_string());
                    Ok(placeholder)
                }
                MarketDataPolicy::Reject => Err(AnalyticsError::validation(format!(
                    "{name}_score is required"
                ))),
            },
        }
    }
}

fn validate_ratios(ratios: &FinancialRatios) -> Result<()> {
    let all_finite = [
        ratios.current_ratio,
        ratios.debt_to_equity,
        ratios.profit_margin,
    ]
    .iter()
    .all(|r| r.is_finite());
    if !all_finite {
        return Err(AnalyticsError::validation("financial ratios must be finite"));
    }
    Ok(())
}

/// 100 less penalties for illiquidity, over-leverage and losses, floored at 0
///
/// A business failing all three tests at once is in distress and scores 0.
fn financial_health(ratios: &FinancialRatios) -> f64 {
    let illiquid = ratios.current_ratio < ILLIQUID_RATIO;
    let overleveraged = ratios.debt_to_equity > OVERLEVERAGED_RATIO;
    let unprofitable = ratios.profit_margin < 0.0;

    if illiquid && overleveraged && unprofitable {
        return 0.0;
    }

    let mut score = 100.0;
    if illiquid {
        score -= ILLIQUID_PENALTY;
    }
    if overleveraged {
        score -= OVERLEVERAGED_PENALTY;
    }
    if unprofitable {
        score -= UNPROFITABLE_PENALTY;
    }
    f64::max(score, 0.0)
}

fn risk_factors(ratios: &FinancialRatios) -> Vec<RiskFactor> {
    let mut factors = Vec::new();
    if ratios.current_ratio < LOW_LIQUIDITY_RATIO {
        let severity = if ratios.current_ratio < ILLIQUID_RATIO {
            Severity::High
        } else {
            Severity::Medium
        };
        factors.push(RiskFactor::new(
            "Liquidity Risk",
            severity,
            "Current ratio below the recommended 1.5 threshold",
        ));
    }
    if ratios.debt_to_equity > HIGH_LEVERAGE_RATIO {
        factors.push(RiskFactor::new(
            "Leverage Risk",
            Severity::High,
            "High debt-to-equity ratio signals financial strain",
        ));
    }
    if ratios.profit_margin < 0.0 {
        factors.push(RiskFactor::new(
            "Profitability Risk",
            Severity::High,
            "Operating at a loss erodes equity and cash reserves",
        ));
    }
    factors
}
