use clap::Parser;
use smb_analytics::cli::{Cli, Commands};
use smb_analytics::config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        Config::default()
    });

    // Initialize telemetry
    smb_analytics::telemetry::init_telemetry(&config.telemetry)?;

    let output = match cli.command {
        Commands::Forecast(args) => args.execute(&config)?,
        Commands::Pricing(args) => args.execute()?,
        Commands::Inventory(args) => args.execute()?,
        Commands::Churn(args) => args.execute()?,
        Commands::Risk(args) => args.execute(&config)?,
        Commands::Config => {
            format!(
                "Current configuration:\n  Log: {} ({:?})\n  Forecast: {} periods @ {}\n  Missing market data: {:?}",
                config.telemetry.log_level,
                config.telemetry.format,
                config.forecast.default_periods,
                config.forecast.default_confidence,
                config.risk.missing_market_data,
            )
        }
    };

    println!("{output}");
    Ok(())
}
