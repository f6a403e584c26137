//! End-to-end tests through the CLI commands

use smb_analytics::cli::{ChurnArgs, ForecastArgs, OutputFormat, RiskArgs};
use smb_analytics::config::Config;
use smb_analytics::risk::MarketDataPolicy;
use std::io::Write;
use tempfile::NamedTempFile;

fn request_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{json}").unwrap();
    file
}

#[test]
fn test_config_example_loads() {
    let config: Config = toml::from_str(include_str!("../../config.toml.example")).unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.forecast.default_periods, 12);
    assert_eq!(config.risk.missing_market_data, MarketDataPolicy::Estimate);
}

#[test]
fn test_forecast_command_uses_config_defaults() {
    let file = request_file(
        r#"{"historical_data": [
            {"date": "2024-01-01", "value": 1000},
            {"date": "2024-02-01", "value": 1100},
            {"date": "2024-03-01", "value": 1250},
            {"date": "2024-04-01", "value": 1300}
        ]}"#,
    );
    let mut config = Config::default();
    config.forecast.default_periods = 3;

    let args = ForecastArgs {
        input: file.path().to_path_buf(),
        periods: None,
        confidence: None,
        format: OutputFormat::Json,
    };
    let output = args.execute(&config).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(json["forecast"].as_array().unwrap().len(), 3);
    assert_eq!(json["trend_direction"], "upward");
}

#[test]
fn test_forecast_command_flag_overrides_request() {
    let file = request_file(
        r#"{"historical_data": [
            {"date": "2024-01-01", "value": 10},
            {"date": "2024-02-01", "value": 8}
        ], "forecast_periods": 2}"#,
    );
    let args = ForecastArgs {
        input: file.path().to_path_buf(),
        periods: Some(5),
        confidence: Some(0.8),
        format: OutputFormat::Table,
    };
    let output = args.execute(&Config::default()).unwrap();
    assert!(output.contains("2024-07-01"));
}

#[test]
fn test_churn_command_reports_summary() {
    let file = request_file(
        r#"{"customers": [
            {"customer_id": "a", "recency_days": 120, "purchase_count": 0, "total_spent": 0, "engagement_score": 10},
            {"customer_id": "b", "recency_days": 3, "purchase_count": 30, "total_spent": 4500, "engagement_score": 90}
        ]}"#,
    );
    let args = ChurnArgs {
        input: file.path().to_path_buf(),
        format: OutputFormat::Json,
    };
    let json: serde_json::Value = serde_json::from_str(&args.execute().unwrap()).unwrap();

    assert_eq!(json["predictions"][0]["risk_level"], "HIGH");
    assert_eq!(json["summary"]["total_customers"], 2);
    assert_eq!(json["summary"]["high_risk"], 1);
}

#[test]
fn test_risk_command_honours_reject_policy() {
    let file = request_file(
        r#"{"financial_data": {"current_ratio": 0.8, "debt_to_equity": 1.1, "profit_margin": 0.02}}"#,
    );
    let args = RiskArgs {
        input: file.path().to_path_buf(),
        format: OutputFormat::Json,
    };

    assert!(args.execute(&Config::default()).is_ok());

    let mut config = Config::default();
    config.risk.missing_market_data = MarketDataPolicy::Reject;
    assert!(args.execute(&config).is_err());
}

#[test]
fn test_missing_request_file_is_an_error() {
    let args = ChurnArgs {
        input: "/nonexistent/customers.json".into(),
        format: OutputFormat::Json,
    };
    assert!(args.execute().is_err());
}
