//! CLI entry point for the education inequity index.
//!
//! Subcommands download raw indicators, harmonize them into tidy tables,
//! build the index and write the public exports.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use edu_inequity::{
    catalog::Catalog,
    config::Settings,
    country::StaticCountryResolver,
    export,
    fetch::{BasicClient, worldbank::download_indicator},
    harmonize, index,
    output::print_json,
};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "edu_inequity")]
#[command(about = "Build a composite education inequity index per country-year", long_about = None)]
struct Cli {
    /// JSON indicator catalog replacing the built-in one
    #[arg(long, global = true, value_name = "PATH")]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download a World Bank indicator as a bulk CSV archive
    Ingest {
        /// World Bank indicator code (e.g. SE.PRM.CMPT.ZS)
        #[arg(value_name = "CODE")]
        code: String,
    },
    /// Convert raw indicator files into tidy interim tables
    Harmonize,
    /// Build the inequity index from the interim tables
    Build,
    /// Write the public CSV exports
    Export,
    /// Write the country-year indicator coverage matrix
    Coverage,
    /// Show the highest index rows of the most recent years
    Top {
        /// Number of rows to show
        #[arg(short, long, default_value_t = 10)]
        n: usize,
    },
    /// Harmonize, build, export and write the coverage matrix
    All,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/edu_inequity.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("edu_inequity.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();
    let settings = Settings::from_env()?;
    let catalog = match &cli.catalog {
        Some(path) => Catalog::load(path)?,
        None => Catalog::default(),
    };
    let resolver = StaticCountryResolver::new();

    match cli.command {
        Commands::Ingest { code } => {
            let client = BasicClient::new()?;
            download_indicator(&client, &code, &settings.raw_dir()).await?;
        }
        Commands::Harmonize => {
            harmonize::run(&settings, &catalog, &resolver)?;
        }
        Commands::Build => {
            let summary = index::run(&settings, &catalog, &resolver)?;
            info!(
                indexed = summary.country_years_indexed,
                seen = summary.country_years_seen,
                "Index built"
            );
        }
        Commands::Export => {
            export::run(&settings, &catalog, &resolver)?;
        }
        Commands::Coverage => {
            export::export_coverage_matrix(&settings, &catalog)?;
        }
        Commands::Top { n } => {
            let rows = index::load_index(&settings.interim_dir())?;
            print_json(&export::top_rows(&rows, n)).context("Failed to print top rows")?;
        }
        Commands::All => {
            harmonize::run(&settings, &catalog, &resolver)?;
            index::run(&settings, &catalog, &resolver)?;
            export::run(&settings, &catalog, &resolver)?;
            export::export_coverage_matrix(&settings, &catalog)?;
            info!(data_dir = %settings.data_dir.display(), "Pipeline finished");
        }
    }

    Ok(())
}
