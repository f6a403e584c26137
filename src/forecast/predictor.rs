//! Cash flow predictor

use chrono::{Datelike, Months, NaiveDate};
use tracing::debug;

use super::decompose::LinearSeasonalDecomposer;
use super::insights::{generate_insights, recommended_actions, risk_score};
use super::{
    months_between, DecompositionModel, ForecastPoint, ForecastResult, Observation,
    SeriesDecomposer, TrendDirection, MAX_CONFIDENCE_LEVEL, MAX_FORECAST_PERIODS,
    MIN_CONFIDENCE_LEVEL, MIN_FORECAST_PERIODS,
};
use crate::error::{AnalyticsError, Result};
use crate::series::{mean, normal_quantile, round2, sample_std_dev, TimeSeriesPoint};

/// Seasonality is reported when its spread exceeds this share of the series scale
const SEASONALITY_THRESHOLD: f64 = 0.01;

/// Monthly cash flow forecaster
#[derive(Debug, Clone, Default)]
pub struct CashFlowPredictor<D = LinearSeasonalDecomposer> {
    decomposer: D,
}

impl CashFlowPredictor<LinearSeasonalDecomposer> {
    /// Create a predictor with the default decomposition
    pub fn new() -> Self {
        Self {
            decomposer: LinearSeasonalDecomposer::new(),
        }
    }
}

impl<D: SeriesDecomposer> CashFlowPredictor<D> {
    /// Create a predictor with a custom decomposition technique
    pub fn with_decomposer(decomposer: D) -> Self {
        Self { decomposer }
    }

    /// Project `periods` months beyond the history
    pub fn forecast(
        &self,
        history: &[TimeSeriesPoint],
        periods: u32,
        confidence_level: f64,
    ) -> Result<ForecastResult> {
        validate(history, periods, confidence_level)?;

        let first = history[0].date;
        let last = history[history.len() - 1].date;
        let observations: Vec<Observation> = history
            .iter()
            .map(|p| Observation {
                t: months_between(first, p.date) as f64,
                month0: p.date.month0(),
                value: p.value,
            })
            .collect();

        debug!(
            points = observations.len(),
            periods, confidence_level, "Fitting cash flow model"
        );

        let model = self.decomposer.fit(&observations);
        let z = normal_quantile((1.0 + confidence_level) / 2.0).ok_or_else(|| {
            AnalyticsError::computation(format!("no z-value for confidence {confidence_level}"))
        })?;

        let mut points = Vec::with_capacity(periods as usize);
        let mut predicted = Vec::with_capacity(periods as usize);
        let mut future_trend = Vec::with_capacity(periods as usize);
        let mut future_seasonal = Vec::with_capacity(periods as usize);

        for k in 1..=periods {
            let date = step_months(last, k)?;
            let t = months_between(first, date) as f64;
            let trend = model.trend(t);
            let seasonal = model.seasonal(date.month0());
            let value = trend + seasonal;
            let half_width = z * model.prediction_std_error(t);

            if !value.is_finite() || !half_width.is_finite() {
                return Err(AnalyticsError::computation(format!(
                    "non-finite projection for {date}"
                )));
            }

            points.push(ForecastPoint {
                date,
                predicted_value: round2(value),
                lower_bound: round2(value - half_width),
                upper_bound: round2(value + half_width),
                trend_value: round2(trend),
            });
            predicted.push(value);
            future_trend.push(trend);
            future_seasonal.push(seasonal);
        }

        let history_values: Vec<f64> = observations.iter().map(|o| o.value).collect();
        let historical_mean = mean(&history_values);
        let history_trend: Vec<f64> = observations.iter().map(|o| model.trend(o.t)).collect();

        let trend_direction = if mean(&future_trend) > mean(&history_trend) {
            TrendDirection::Upward
        } else {
            TrendDirection::Downward
        };

        let mut seasonal_component: Vec<f64> =
            observations.iter().map(|o| model.seasonal(o.month0)).collect();
        seasonal_component.extend(future_seasonal);
        let scale = if historical_mean == 0.0 {
            1.0
        } else {
            historical_mean.abs()
        };
        let seasonality_detected =
            sample_std_dev(&seasonal_component) > SEASONALITY_THRESHOLD * scale;

        let insights = generate_insights(&predicted, historical_mean);
        let risk_score = risk_score(&predicted, &future_trend, historical_mean);
        let recommended_actions = recommended_actions(risk_score);

        Ok(ForecastResult {
            forecast: points,
            trend_direction,
            seasonality_detected,
            insights,
            risk_score,
            recommended_actions,
        })
    }
}

fn validate(history: &[TimeSeriesPoint], periods: u32, confidence_level: f64) -> Result<()> {
    if history.len() < 2 {
        return Err(AnalyticsError::validation(format!(
            "at least 2 historical points required, got {}",
            history.len()
        )));
    }
    if let Some(bad) = history.iter().find(|p| !p.value.is_finite()) {
        return Err(AnalyticsError::validation(format!(
            "non-finite value on {}",
            bad.date
        )));
    }
    if !(MIN_FORECAST_PERIODS..=MAX_FORECAST_PERIODS).contains(&periods) {
        return Err(AnalyticsError::validation(format!(
            "forecast_periods must be in [{MIN_FORECAST_PERIODS}, {MAX_FORECAST_PERIODS}], got {periods}"
        )));
    }
    if !(MIN_CONFIDENCE_LEVEL..=MAX_CONFIDENCE_LEVEL).contains(&confidence_level) {
        return Err(AnalyticsError::validation(format!(
            "confidence_level must be in [{MIN_CONFIDENCE_LEVEL}, {MAX_CONFIDENCE_LEVEL}], got {confidence_level}"
        )));
    }
    Ok(())
}

fn step_months(date: NaiveDate, k: u32) -> Result<NaiveDate> {
    date.checked_add_months(Months::new(k))
        .ok_or_else(|| AnalyticsError::computation(format!("{date} + {k} months overflows")))
}
