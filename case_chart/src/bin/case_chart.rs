use anyhow::{Context, Result};
use case_chart::{CaseChart, CaseField, CaseSeries, ChartConfig, DataLoader, Region};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = case_chart::NAME,
    version = case_chart::VERSION,
    author,
    about = "Chart daily case counts with a short projection",
    long_about = None
)]
struct Cli {
    /// Daily records as CSV (date,positive_increase,positive) or JSON
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Count to chart: new or total
    #[arg(long, default_value = "new")]
    field: CaseField,

    /// Region the records belong to (US or a state code)
    #[arg(long, default_value = "US")]
    region: Region,

    /// Days to project past the last record
    #[arg(long)]
    horizon: Option<usize>,

    /// Smoothing window in days
    #[arg(long)]
    window: Option<usize>,

    /// Only chart the most recent days
    #[arg(long)]
    history_days: Option<usize>,

    /// TOML configuration file; flags override its values
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the chart as JSON instead of text bars
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = load_config(&cli)?;

    let records = DataLoader::from_path(&cli.input)
        .with_context(|| format!("failed to load {}", cli.input.display()))?;
    let series = CaseSeries::from_records(records, cli.field)?;
    info!(
        region = %cli.region,
        days = series.len(),
        field = %cli.field,
        "loaded series"
    );

    let chart = match CaseChart::build(&series, &config) {
        Ok(chart) => chart,
        Err(err) if err.is_insufficient_data() => {
            warn!("skipping projection: {}", err);
            CaseChart::raw_only(&series, &config)?
        }
        Err(err) => return Err(err.into()),
    };

    if cli.json {
        println!("{}", chart.to_json()?);
    } else {
        println!("{} {}", cli.region, cli.field);
        println!("{}", chart);
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<ChartConfig> {
    let mut config = match &cli.config {
        Some(path) => ChartConfig::from_toml_file(path)
            .with_context(|| format!("failed to read config {}", path.display()))?,
        None => ChartConfig::default(),
    };

    if let Some(horizon) = cli.horizon {
        config.horizon = horizon;
    }
    if let Some(window) = cli.window {
        config.window = window;
    }
    if cli.history_days.is_some() {
        config.history_days = cli.history_days;
    }

    config.validate()?;
    Ok(config)
}
