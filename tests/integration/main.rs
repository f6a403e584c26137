//! Integration tests for the analytics engine

mod churn_test;
mod e2e_test;
mod forecast_test;
mod inventory_test;
mod pricing_test;
mod properties_test;
mod risk_test;

use chrono::{Months, NaiveDate};
use smb_analytics::series::TimeSeriesPoint;

/// Monthly series starting January 2022
pub fn monthly(values: &[f64]) -> Vec<TimeSeriesPoint> {
    let start = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            TimeSeriesPoint::new(
                start.checked_add_months(Months::new(i as u32)).unwrap(),
                *v,
            )
        })
        .collect()
}
