//! Integration tests for cash flow forecasting

use crate::monthly;
use smb_analytics::forecast::TrendDirection;
use smb_analytics::forecast_cash_flow;

#[test]
fn test_increasing_series_trends_upward() {
    let values: Vec<f64> = (0..24).map(|i| 10_000.0 + 250.0 * i as f64).collect();
    let result = forecast_cash_flow(&monthly(&values), 12, 0.95).unwrap();

    assert_eq!(result.forecast.len(), 12);
    assert_eq!(result.trend_direction, TrendDirection::Upward);
}

#[test]
fn test_bands_contain_prediction() {
    let values = [
        4200.0, 3900.0, 5100.0, 4800.0, 4400.0, 6100.0, 5200.0, 4700.0, 5600.0, 6300.0, 5900.0,
        7200.0, 5100.0, 4800.0, 6000.0, 5800.0, 5300.0, 7000.0, 6100.0, 5600.0, 6500.0, 7300.0,
        6800.0, 8100.0,
    ];
    let result = forecast_cash_flow(&monthly(&values), 18, 0.9).unwrap();

    for point in &result.forecast {
        assert!(point.lower_bound <= point.predicted_value);
        assert!(point.predicted_value <= point.upper_bound);
    }
}

#[test]
fn test_bands_widen_over_horizon() {
    let values = [100.0, 120.0, 95.0, 130.0, 110.0, 140.0, 105.0, 150.0];
    let result = forecast_cash_flow(&monthly(&values), 12, 0.95).unwrap();

    let first = &result.forecast[0];
    let last = &result.forecast[11];
    assert!(last.upper_bound - last.lower_bound > first.upper_bound - first.lower_bound);
}

#[test]
fn test_forecast_starts_after_history() {
    let result = forecast_cash_flow(&monthly(&[1.0, 2.0, 3.0]), 1, 0.8).unwrap();
    assert_eq!(result.forecast[0].date.to_string(), "2022-04-01");
}

#[test]
fn test_risk_score_in_range() {
    let values = [500.0, -200.0, 800.0, -900.0, 300.0, -100.0];
    let result = forecast_cash_flow(&monthly(&values), 24, 0.99).unwrap();
    assert!((0.0..=100.0).contains(&result.risk_score));
    assert!(!result.recommended_actions.is_empty());
}

#[test]
fn test_validation_errors() {
    assert!(forecast_cash_flow(&[], 12, 0.95).unwrap_err().is_validation());
    assert!(forecast_cash_flow(&monthly(&[1.0]), 12, 0.95)
        .unwrap_err()
        .is_validation());
    assert!(forecast_cash_flow(&monthly(&[1.0, 2.0]), 61, 0.95)
        .unwrap_err()
        .is_validation());
    assert!(forecast_cash_flow(&monthly(&[1.0, 2.0]), 12, 0.5)
        .unwrap_err()
        .is_validation());
}
