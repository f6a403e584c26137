//! Engine metrics
//!
//! Recorded through the `metrics` facade; they are no-ops until the
//! embedding process installs a recorder.

use std::time::Duration;

const REQUESTS_TOTAL: &str = "smb_analytics_requests_total";
const COMPUTATION_SECONDS: &str = "smb_analytics_computation_seconds";

/// Engine component label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    CashFlow,
    Pricing,
    Inventory,
    Churn,
    Risk,
}

impl Component {
    /// Metric label value
    pub fn as_str(&self) -> &'static str {
        match self {
            Component::CashFlow => "cash_flow",
            Component::Pricing => "pricing",
            Component::Inventory => "inventory",
            Component::Churn => "churn",
            Component::Risk => "risk",
        }
    }
}

/// Outcome label for a completed call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ok,
    ValidationError,
    ComputationError,
}

impl Outcome {
    /// Metric label value
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Ok => "ok",
            Outcome::ValidationError => "validation_error",
            Outcome::ComputationError => "computation_error",
        }
    }
}

/// Register metric descriptions with the installed recorder
pub fn describe_metrics() {
    metrics::describe_counter!(REQUESTS_TOTAL, "Engine calls by component and outcome");
    metrics::describe_histogram!(
        COMPUTATION_SECONDS,
        metrics::Unit::Seconds,
        "Time spent computing a result"
    );
}

/// Record one engine call
pub fn record_computation(component: Component, outcome: Outcome, duration: Duration) {
    metrics::counter!(
        REQUESTS_TOTAL,
        "component" => component.as_str(),
        "outcome" => outcome.as_str()
    )
    .increment(1);
    metrics::histogram!(COMPUTATION_SECONDS, "component" => component.as_str())
        .record(duration.as_secs_f64());

    tracing::debug!(
        component = component.as_str(),
        outcome = outcome.as_str(),
        elapsed_us = duration.as_micros() as u64,
        "Recorded computation"
    );
}
