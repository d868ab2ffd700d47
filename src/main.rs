//! `boxlog` command-line front end.
//!
//! Emits a single boxed record to stdout:
//!
//! ```text
//! boxlog [--config PATH] [--dev | --prod] <SEVERITY> <MESSAGE> [--data JSON]
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use boxlog::config::{load_config, LoggerConfig};
use boxlog::observability::init_tracing;
use boxlog::{Logger, Severity};
use clap::Parser;

#[derive(Parser)]
#[command(name = "boxlog")]
#[command(about = "Print a boxed, colorized log block", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Force development mode
    #[arg(long, conflicts_with = "prod")]
    dev: bool,

    /// Force production mode
    #[arg(long)]
    prod: bool,

    /// info, error, debug or production
    severity: Severity,

    /// Message; embedded newlines become separate lines
    message: String,

    /// Auxiliary data as JSON
    #[arg(short, long)]
    data: Option<String>,
}

fn main() -> ExitCode {
    let _ = init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => LoggerConfig::from_env()?,
    };
    if cli.dev {
        config.dev_mode = true;
    } else if cli.prod {
        config.dev_mode = false;
    }

    let data: Option<serde_json::Value> = cli
        .data
        .as_deref()
        .map(serde_json::from_str)
        .transpose()?;

    let logger = Logger::from_config(&config)?;
    logger.log(cli.severity, &cli.message, data.as_ref())?;
    Ok(())
}
