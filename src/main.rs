//! CLI entry point for the restaurant explorer.
//!
//! Lists locations, prints the top-rated restaurants for one location, or
//! runs an interactive picker over a cached dataset.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, Write};
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    filter::LevelFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};
use zomato_explorer::{
    aggregate::{DEFAULT_TOP_N, top_rated},
    cache::DatasetCache,
    config::{DEFAULT_DATA_SOURCE, LogSettings},
    explore,
    output::{TopRatedReport, to_json, write_csv, write_csv_file},
    render::{RenderOptions, report},
};

#[derive(Parser)]
#[command(name = "zomato_explorer")]
#[command(about = "Explore top-rated restaurants by location", long_about = None)]
struct Cli {
    /// Path or URL of the restaurant CSV
    #[arg(long, global = true, env = "ZOMATO_DATA", default_value = DEFAULT_DATA_SOURCE)]
    data: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
    Csv,
}

#[derive(Subcommand)]
enum Commands {
    /// List the distinct locations in the dataset
    Locations,
    /// Show the top-rated restaurants in a location
    Top {
        /// Location to report on (exact, case-sensitive)
        location: String,

        /// Number of restaurants to keep
        #[arg(short, long, default_value_t = DEFAULT_TOP_N)]
        n: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<String>,

        /// Disable ANSI colour in text output
        #[arg(long, default_value_t = false)]
        no_color: bool,
    },
    /// Pick locations interactively from stdin
    Explore {
        /// Number of restaurants to keep
        #[arg(short, long, default_value_t = DEFAULT_TOP_N)]
        n: usize,

        /// Disable ANSI colour
        #[arg(long, default_value_t = false)]
        no_color: bool,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log = LogSettings::from_env();
    let file_appender = tracing_appender::rolling::daily(&log.directory, &log.file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(io::stderr)
        .with_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        );

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(
            EnvFilter::builder()
                .with_env_var("RUST_LOG_JSON")
                .with_default_directive(LevelFilter::DEBUG.into())
                .from_env_lossy(),
        );

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();
    let cache = DatasetCache::new(cli.data);

    match cli.command {
        Commands::Locations => {
            let dataset = cache.get_or_load()?;
            let locations = dataset.locations();
            info!(count = locations.len(), "Locations listed");

            let mut out = io::stdout().lock();
            for location in locations {
                writeln!(out, "{location}")?;
            }
        }
        Commands::Top {
            location,
            n,
            format,
            output,
            no_color,
        } => {
            let dataset = cache.get_or_load()?;
            let rows = top_rated(&dataset, &location, n);
            info!(location = %location, n, rows = rows.len(), "Top-rated computed");

            if rows.is_empty() {
                warn!(location = %location, "No restaurants found for location");
            }

            let opts = RenderOptions {
                color: !no_color && output.is_none(),
                ..Default::default()
            };

            match (format, output) {
                (Format::Csv, Some(path)) => write_csv_file(&path, &rows)?,
                (Format::Csv, None) => write_csv(io::stdout().lock(), &rows)?,
                (Format::Json, path) => {
                    let json = to_json(&TopRatedReport::new(&location, rows))?;
                    emit(path.as_deref(), &format!("{json}\n"))?;
                }
                (Format::Text, path) => {
                    emit(path.as_deref(), &report(&location, &rows, n, &opts))?;
                }
            }
        }
        Commands::Explore { n, no_color } => {
            let opts = RenderOptions {
                color: !no_color,
                ..Default::default()
            };
            explore::run(&cache, io::stdin().lock(), io::stdout().lock(), n, &opts)?;
        }
    }

    Ok(())
}

/// Writes `text` to `path`, or to stdout when no path is given.
fn emit(path: Option<&str>, text: &str) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, text)?,
        None => io::stdout().lock().write_all(text.as_bytes())?,
    }
    Ok(())
}
