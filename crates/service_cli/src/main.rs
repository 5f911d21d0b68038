//! Market CLI - curve sensitivity aggregation and currency conversion
//!
//! # Commands
//!
//! - `market total --input <file> [--currency <ccy>]` - Total sensitivities
//! - `market convert --input <file> --currency <ccy>` - Convert sensitivities
//!
//! FX rates, the default reporting currency and the log level are read from
//! the configuration file (`market.toml` by default) and the `MARKET_*`
//! environment variables.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod input;

pub use error::{CliError, Result};

/// Curve sensitivity tool
#[derive(Parser)]
#[command(name = "market")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Total curve sensitivities, optionally in a single reporting currency
    Total {
        /// Path to sensitivity file (TOML)
        #[arg(short, long)]
        input: PathBuf,

        /// Reporting currency, overriding the configured one
        #[arg(short = 'x', long)]
        currency: Option<String>,
    },

    /// Convert curve sensitivities into another currency
    Convert {
        /// Path to sensitivity file (TOML)
        #[arg(short, long)]
        input: PathBuf,

        /// Target currency
        #[arg(short = 'x', long)]
        currency: String,
    },
}

const DEFAULT_CONFIG: &str = "market.toml";

fn main() -> Result<()> {
    let cli = Cli::parse();

    let explicit = cli.config.is_some();
    let config_path = cli.config.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));
    let config = config::build_config(&config_path, explicit, cli.verbose)?;

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_filter_str()));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(config = %config_path.display(), fx_rates = config.fx_rates.len(), "configuration loaded");

    match cli.command {
        Commands::Total { input, currency } => commands::total::run(&input, currency.as_deref(), &config),
        Commands::Convert { input, currency } => commands::convert::run(&input, &currency, &config),
    }
}
