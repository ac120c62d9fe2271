//! # metricast
//!
//! Command-line interface for the metricast forecasting engine.

use clap::{Parser, Subcommand};
use metricast_facade::{
    generate_future_periods, Cadence, DataPoint, EngineBuilder, ForecastConfig, ForecastEngine,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type CliResult<T> = std::result::Result<T, String>;

#[derive(Parser)]
#[command(name = "metricast")]
#[command(about = "Business metric forecasting CLI", long_about = None)]
struct Cli {
    /// Engine configuration file (JSON); omitted fields take defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Holt level smoothing, overrides the configuration file
    #[arg(long, global = true)]
    alpha: Option<f64>,

    /// Holt trend smoothing, overrides the configuration file
    #[arg(long, global = true)]
    beta: Option<f64>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Forecast a single series
    Forecast {
        /// Input file (CSV with period,value columns or JSON array of points)
        #[arg(short, long)]
        input: PathBuf,

        /// Series cadence (monthly, yearly); inferred from the labels if omitted
        #[arg(short, long)]
        cadence: Option<Cadence>,

        /// Number of periods to forecast
        #[arg(short = 'H', long)]
        horizon: Option<usize>,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Forecast every series of a JSON object keyed by metric name
    Batch {
        /// Input JSON file
        #[arg(short, long)]
        input: PathBuf,

        /// Series cadence (monthly, yearly)
        #[arg(short, long, default_value = "monthly")]
        cadence: Cadence,

        /// Number of periods to forecast
        #[arg(short = 'H', long)]
        horizon: Option<usize>,

        /// Forecast metrics in parallel
        #[arg(long)]
        parallel: bool,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the period labels following a given label
    Periods {
        /// Last known period label
        #[arg(short, long)]
        last: String,

        /// Number of labels to generate
        #[arg(short = 'n', long, default_value = "6")]
        count: usize,

        /// Label cadence; inferred from the label if omitted
        #[arg(short, long)]
        cadence: Option<Cadence>,
    },
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "metricast=debug" } else { "metricast=info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();
}

/// Load the engine configuration, applying command-line overrides
fn load_config(path: Option<&Path>, alpha: Option<f64>, beta: Option<f64>) -> CliResult<ForecastConfig> {
    let mut config = match path {
        Some(path) => {
            let file = File::open(path).map_err(|e| format!("Failed to open config: {}", e))?;
            serde_json::from_reader(BufReader::new(file))
                .map_err(|e| format!("Failed to parse config: {}", e))?
        }
        None => ForecastConfig::default(),
    };

    if let Some(alpha) = alpha {
        config.alpha = alpha;
    }
    if let Some(beta) = beta {
        config.beta = beta;
    }
    Ok(config)
}

fn build_engine(config: ForecastConfig) -> CliResult<ForecastEngine> {
    debug!(?config, "building engine");
    EngineBuilder::new()
        .config(config)
        .build()
        .map_err(|e| format!("Invalid configuration: {}", e))
}

/// Load a series from a CSV file with `period` and `value` columns
fn load_csv_series(path: &Path) -> CliResult<Vec<DataPoint>> {
    let file = File::open(path).map_err(|e| format!("Failed to open file: {}", e))?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(BufReader::new(file));

    let mut points = Vec::new();
    for (row, result) in reader.deserialize::<DataPoint>().enumerate() {
        let point = result.map_err(|e| format!("Failed to read record {}: {}", row + 1, e))?;
        points.push(point);
    }
    Ok(points)
}

/// Load a series from a JSON file.
///
/// Accepts either an array of `{period, value}` objects or an object holding
/// such an array under `data`, `series` or `points`.
fn load_json_series(path: &Path) -> CliResult<Vec<DataPoint>> {
    let file = File::open(path).map_err(|e| format!("Failed to open file: {}", e))?;
    let json: serde_json::Value = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| format!("Failed to parse JSON: {}", e))?;

    let array = if json.is_array() {
        json
    } else {
        ["data", "series", "points"]
            .iter()
            .find_map(|key| json.get(*key).filter(|v| v.is_array()).cloned())
            .ok_or_else(|| "Expected an array of {period, value} objects".to_string())?
    };

    serde_json::from_value(array).map_err(|e| format!("Invalid data point: {}", e))
}

/// Load a series from file (format from the extension)
fn load_series(path: &Path) -> CliResult<Vec<DataPoint>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "csv" => load_csv_series(path),
        "json" => load_json_series(path),
        _ => load_json_series(path).or_else(|_| load_csv_series(path)),
    }
}

/// Load named series from a JSON object `{ "metric": [{period, value}, ...] }`
fn load_metrics(path: &Path) -> CliResult<BTreeMap<String, Vec<DataPoint>>> {
    let file = File::open(path).map_err(|e| format!("Failed to open file: {}", e))?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| format!("Failed to parse metrics JSON: {}", e))
}

/// Write a value as pretty JSON to a file or stdout
fn write_json<T: Serialize>(value: &T, output: Option<&Path>) -> CliResult<()> {
    let json =
        serde_json::to_string_pretty(value).map_err(|e| format!("Failed to encode JSON: {}", e))?;

    match output {
        Some(path) => {
            std::fs::write(path, json).map_err(|e| format!("Failed to write output: {}", e))?;
            info!(path = %path.display(), "results written");
        }
        None => println!("{}", json),
    }
    Ok(())
}

fn default_horizon(cadence: Cadence, config: &ForecastConfig) -> usize {
    match cadence {
        Cadence::Monthly => config.default_horizon,
        Cadence::Yearly => cadence.horizon(),
    }
}

fn run_forecast(
    config: ForecastConfig,
    input: PathBuf,
    cadence: Option<Cadence>,
    horizon: Option<usize>,
    output: Option<PathBuf>,
) -> CliResult<()> {
    let points = load_series(&input)?;
    let cadence = cadence
        .or_else(|| points.last().map(|p| Cadence::infer(&p.period)))
        .unwrap_or_default();
    let horizon = horizon.unwrap_or_else(|| default_horizon(cadence, &config));
    info!(input = %input.display(), points = points.len(), %cadence, horizon, "forecasting series");

    let engine = build_engine(config)?;
    let result = engine
        .try_forecast(&points, cadence, horizon)
        .map_err(|e| e.to_string())?;
    write_json(&result, output.as_deref())
}

fn run_batch(
    mut config: ForecastConfig,
    input: PathBuf,
    cadence: Cadence,
    horizon: Option<usize>,
    parallel: bool,
    output: Option<PathBuf>,
) -> CliResult<()> {
    let metrics = load_metrics(&input)?;
    let horizon = horizon.unwrap_or_else(|| default_horizon(cadence, &config));
    config.parallel |= parallel;
    info!(input = %input.display(), metrics = metrics.len(), %cadence, horizon, "forecasting metrics");

    let engine = build_engine(config)?;
    let results = engine.forecast_many(&metrics, cadence, horizon);
    write_json(&results, output.as_deref())
}

fn run_periods(last: String, count: usize, cadence: Option<Cadence>) -> CliResult<()> {
    let cadence = cadence.unwrap_or_else(|| Cadence::infer(&last));
    let labels = generate_future_periods(&last, cadence, count).map_err(|e| e.to_string())?;
    for label in labels {
        println!("{}", label);
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = load_config(cli.config.as_deref(), cli.alpha, cli.beta).and_then(|config| {
        match cli.command {
            Commands::Forecast {
                input,
                cadence,
                horizon,
                output,
            } => run_forecast(config, input, cadence, horizon, output),

            Commands::Batch {
                input,
                cadence,
                horizon,
                parallel,
                output,
            } => run_batch(config, input, cadence, horizon, parallel, output),

            Commands::Periods {
                last,
                count,
                cadence,
            } => run_periods(last, count, cadence),
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
