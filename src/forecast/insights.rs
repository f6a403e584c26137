//! Forecast interpretation: insights, risk score, recommended actions

use crate::series::{mean, pct_change, round2, sample_std_dev};

/// Percent change beyond which growth or contraction is reported
const CHANGE_THRESHOLD_PCT: f64 = 20.0;
/// Volatility (as a fraction of the historical mean) considered high
const HIGH_VOLATILITY_RATIO: f64 = 0.3;
/// Maximum contribution of volatility to the risk score
const MAX_VOLATILITY_SCORE: f64 = 50.0;
/// Risk points per negative period
const NEGATIVE_PERIOD_SCORE: f64 = 10.0;
/// Risk points for a declining trend over the horizon
const DECLINING_TREND_SCORE: f64 = 30.0;

/// Build textual insights from the projected values
pub fn generate_insights(predicted: &[f64], historical_mean: f64) -> Vec<String> {
    let mut insights = Vec::new();
    let future_mean = mean(predicted);

    if let Some(change_pct) = pct_change(historical_mean, future_mean) {
        if change_pct > CHANGE_THRESHOLD_PCT {
            insights.push(format!(
                "Cash flow projected to grow {change_pct:.1}% above the historical average - evaluate expansion opportunities"
            ));
        } else if change_pct < -CHANGE_THRESHOLD_PCT {
            insights.push(format!(
                "Cash flow projected to fall {:.1}% below the historical average - prioritise cost reduction",
                change_pct.abs()
            ));
        }
    }

    let volatility = sample_std_dev(predicted);
    if volatility > historical_mean.abs() * HIGH_VOLATILITY_RATIO {
        insights.push(
            "High projected volatility - diversify revenue streams to stabilise cash flow"
                .to_string(),
        );
    }

    let negative = count_negative(predicted);
    if negative > 0 {
        insights.push(format!(
            "{negative} projected period(s) with negative cash flow - arrange a credit line in advance"
        ));
    }

    insights
}

/// Composite 0-100 risk score for the forecast horizon
///
/// Volatility relative to the historical mean (capped at 50), plus 10 per
/// negative period, plus 30 when the trend declines across the horizon.
pub fn risk_score(predicted: &[f64], trend: &[f64], historical_mean: f64) -> f64 {
    let volatility = sample_std_dev(predicted);
    let volatility_score = if historical_mean == 0.0 {
        if volatility > 0.0 {
            MAX_VOLATILITY_SCORE
        } else {
            0.0
        }
    } else {
        (volatility / historical_mean.abs() * 100.0).min(MAX_VOLATILITY_SCORE)
    };

    let negative_score = count_negative(predicted) as f64 * NEGATIVE_PERIOD_SCORE;
    let trend_score = if is_declining(trend) {
        DECLINING_TREND_SCORE
    } else {
        0.0
    };

    round2((volatility_score + negative_score + trend_score).clamp(0.0, 100.0))
}

/// Actions tiered on the risk score
pub fn recommended_actions(risk_score: f64) -> Vec<String> {
    let actions: &[&str] = if risk_score > 70.0 {
        &[
            "Build an emergency cash reserve covering 3-6 months of expenses",
            "Negotiate extended payment terms with suppliers",
            "Consider invoice factoring for immediate liquidity",
        ]
    } else if risk_score > 40.0 {
        &[
            "Review cash position weekly",
            "Accelerate collection of receivables",
            "Defer non-essential capital expenditure",
        ]
    } else {
        &[
            "Evaluate strategic investments for growth",
            "Optimise working capital",
            "Maintain current financial discipline",
        ]
    };
    actions.iter().map(|a| a.to_string()).collect()
}

fn count_negative(values: &[f64]) -> usize {
    values.iter().filter(|v| **v < 0.0).count()
}

/// Non-increasing across the horizon and strictly lower at the end
fn is_declining(trend: &[f64]) -> bool {
    match (trend.first(), trend.last()) {
        (Some(first), Some(last)) if trend.len() >= 2 => {
            last < first && trend.windows(2).all(|w| w[1] <= w[0])
        }
        _ => false,
    }
}
