//! TransX - menu-driven console banking
//!
//! # Usage
//! ```bash
//! transx
//! transx --config transx.toml
//! transx --prefix TRX --no-banner
//! RUST_LOG=transx_core=debug transx
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use transx_cli::{App, AppConfig};
use transx_core::Ledger;

/// TransX - a simple in-memory banking system
#[derive(Parser, Debug)]
#[command(name = "transx")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Account number prefix (overrides the config file)
    #[arg(long)]
    prefix: Option<String>,

    /// Skip the welcome banner
    #[arg(long)]
    no_banner: bool,

    /// Log level when RUST_LOG is unset (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level);

    let mut config = match &args.config {
        Some(path) => AppConfig::load_file(path)
            .with_context(|| format!("Failed to load config from {:?}", path))?,
        None => AppConfig::default(),
    };

    if let Some(prefix) = args.prefix {
        config.ledger.account_prefix = prefix.to_uppercase();
        config.validate().context("Invalid --prefix")?;
    }
    if args.no_banner {
        config.show_banner = false;
    }

    tracing::info!(
        prefix = %config.ledger.account_prefix,
        sequence_base = config.ledger.sequence_base,
        "Starting TransX v{}",
        env!("CARGO_PKG_VERSION")
    );

    let ledger = Ledger::with_config(config.ledger);
    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut app = App::new(ledger, stdin.lock(), stdout.lock()).with_banner(config.show_banner);
    app.run()
}

/// Logs go to stderr so they never mix with the menu on stdout.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}
