//! Linkprobe main entry point
//!
//! Command-line interface for the Linkprobe link-resolution engine.

use clap::{Parser, Subcommand};
use linkprobe::api::{self, FetchUrlsResponse};
use linkprobe::config::{load_config_with_hash, Config};
use linkprobe::output::{print_report, summarize};
use linkprobe::{prepare_batch, FetchMode, Prober};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Linkprobe: batch link resolution
///
/// Linkprobe fetches a small batch of seed pages and either follows tracked
/// outbound links to their final destination, reports broken outbound links,
/// or detects duplicated SEO metadata.
#[derive(Parser, Debug)]
#[command(name = "linkprobe")]
#[command(version = "1.0.0")]
#[command(about = "Batch link-resolution engine", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(short, long, global = true, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Probe a batch of seed URLs and print the results
    Check {
        /// Analysis to run: rt, broken or seo
        #[arg(short, long, default_value = "rt")]
        mode: FetchMode,

        /// Print the results as JSON instead of a text report
        #[arg(long)]
        json: bool,

        /// Seed URLs
        #[arg(required = true, value_name = "URL")]
        urls: Vec<String>,
    },

    /// Serve the HTTP API
    Serve {
        /// Port to listen on (falls back to $PORT, then the config file)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            match load_config_with_hash(path) {
                Ok((cfg, hash)) => {
                    tracing::info!("Configuration loaded successfully (hash: {})", hash);
                    cfg
                }
                Err(e) => {
                    tracing::error!("Failed to load configuration: {}", e);
                    return Err(e.into());
                }
            }
        }
        None => Config::default(),
    };

    match cli.command {
        Command::Check { mode, json, urls } => handle_check(&config, mode, json, urls).await?,
        Command::Serve { port } => handle_serve(&config, port).await?,
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("linkprobe=info,warn"),
            1 => EnvFilter::new("linkprobe=debug,info"),
            2 => EnvFilter::new("linkprobe=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Handles `check`: validates the batch, probes it and prints the outcome
async fn handle_check(
    config: &Config,
    mode: FetchMode,
    json: bool,
    urls: Vec<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Err(e) = prepare_batch(&urls, config.batch.max_urls) {
        tracing::error!("Rejected batch: {}", e);
        return Err(e.into());
    }

    let prober = Prober::new(config)?;
    let results = prober.probe_batch(&urls, mode).await;

    if json {
        let response = FetchUrlsResponse::new(results);
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        let stats = summarize(&results, &config.filter);
        print_report(&results, &stats);
    }

    Ok(())
}

/// Handles `serve`: runs the HTTP API until interrupted
async fn handle_serve(config: &Config, port: Option<u16>) -> Result<(), Box<dyn std::error::Error>> {
    let port = match port {
        Some(port) => port,
        None => match std::env::var("PORT") {
            Ok(value) => value.parse()?,
            Err(_) => config.server.port,
        },
    };

    api::serve(config, port).await?;
    Ok(())
}
