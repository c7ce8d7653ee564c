//! worldworth CLI - government real-estate sales ingester.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use worldworth_lib::{DEFAULT_SINK_URL, SourceRegistry};

mod commands;
mod display;
mod logging;

#[derive(Parser)]
#[command(name = "worldworth")]
#[command(about = "Fetch government real-estate sales and forward them to an ingestion API", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (errors only, no summary)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// JSON source table to use instead of the built-in one
    #[arg(long, global = true, env = "WORLDWORTH_SOURCES")]
    sources: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Download, validate and deliver the sales for a region
    Ingest {
        /// Region identifier (see `worldworth sources`)
        #[arg(default_value = "US")]
        region: String,

        /// Ingestion endpoint that accepts one record per POST
        #[arg(long, env = "WORLDWORTH_SINK_URL", default_value = DEFAULT_SINK_URL)]
        sink_url: String,

        /// Maximum concurrent deliveries
        #[arg(long, default_value = "1")]
        concurrency: usize,

        /// Per-request timeout in seconds
        #[arg(long, default_value = "30")]
        timeout: u64,
    },

    /// Download and validate without delivering; prints records as NDJSON
    Preview {
        /// Region identifier (see `worldworth sources`)
        #[arg(default_value = "US")]
        region: String,

        /// Print at most this many records
        #[arg(short, long)]
        limit: Option<usize>,

        /// Per-request timeout in seconds
        #[arg(long, default_value = "30")]
        timeout: u64,
    },

    /// List configured regions and their source URLs
    Sources,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet)?;

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let custom;
    let registry = match &cli.sources {
        Some(path) => {
            custom = SourceRegistry::from_path(path)
                .with_context(|| format!("Failed to load source table {}", path.display()))?;
            &custom
        }
        None => SourceRegistry::global(),
    };

    match command {
        Commands::Ingest {
            region,
            sink_url,
            concurrency,
            timeout,
        } => {
            commands::ingest::ingest(
                registry,
                &region,
                &sink_url,
                concurrency,
                Duration::from_secs(timeout),
                cli.quiet,
            )
            .await
        }
        Commands::Preview {
            region,
            limit,
            timeout,
        } => {
            commands::preview::preview(registry, &region, limit, Duration::from_secs(timeout))
                .await
        }
        Commands::Sources => commands::sources::list_sources(registry),
    }
}
