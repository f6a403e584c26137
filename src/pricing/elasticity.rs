//! Price elasticity estimation from demand history

use crate::error::{AnalyticsError, Result};
use crate::series::{mean, std_dev};

/// Elasticity assumed when estimation is not possible
pub const DEFAULT_ELASTICITY: f64 = -1.5;
/// Most elastic value an estimate or a supplied elasticity may take
pub const MIN_ELASTICITY: f64 = -5.0;
/// Largest supplied elasticity accepted
pub const MAX_ELASTICITY: f64 = 5.0;
/// Fewest demand points needed for an estimate
const MIN_POINTS: usize = 3;

/// Estimate elasticity from demand volatility
///
/// e = -1 - stddev / (mean + 1), floored at -5. More volatile demand is
/// taken as a sign of more price-sensitive customers.
pub fn estimate_elasticity(demand: &[f64]) -> Result<f64> {
    if demand.len() < MIN_POINTS {
        return Err(AnalyticsError::computation(format!(
            "{} demand points, need {MIN_POINTS} to estimate elasticity",
            demand.len()
        )));
    }

    let denominator = mean(demand) + 1.0;
    if denominator.abs() < f64::EPSILON {
        return Err(AnalyticsError::computation(
            "mean demand too close to -1 for elasticity estimate",
        ));
    }

    let elasticity = -1.0 - std_dev(demand) / denominator;
    if !elasticity.is_finite() {
        return Err(AnalyticsError::computation("non-finite elasticity estimate"));
    }

    Ok(elasticity.max(MIN_ELASTICITY))
}
