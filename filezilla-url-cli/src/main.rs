//! filezilla-url CLI - Command-line interface
//!
//! Resolves the latest FileZilla version and download URL for a release
//! channel, printing the processor outputs for packaging pipelines.

mod commands;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use filezilla_url::{logging, ProviderConfig};

use commands::resolve::{OutputFormat, ResolveArgs};
use error::CliError;

#[derive(Debug, Parser)]
#[command(name = "filezilla-url", version, about = "Find the latest FileZilla download URL")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config.ini (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the update manifest URL
    #[arg(long, global = true)]
    manifest_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Resolve the version and download URL for a product
    Resolve {
        /// One of: filezilla, filezilla_release, filezilla_beta, filezilla_nightly
        product_name: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List accepted product names and their channels
    Products,

    /// Describe the processor's input and output variables
    Info,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Resolve {
            product_name,
            format,
        } => {
            let config = load_config(cli.config, cli.manifest_url, cli.timeout)?;
            commands::resolve::run(
                ResolveArgs {
                    product_name,
                    format,
                },
                &config,
            )
        }
        Commands::Products => {
            commands::products::run();
            Ok(())
        }
        Commands::Info => {
            commands::info::run();
            Ok(())
        }
    }
}

/// Load the config file and apply CLI overrides (CLI > config > defaults).
fn load_config(
    path: Option<PathBuf>,
    manifest_url: Option<String>,
    timeout: Option<u64>,
) -> Result<ProviderConfig, CliError> {
    let mut config = match path {
        Some(path) => ProviderConfig::load_from(&path)?,
        None => ProviderConfig::load()?,
    };

    if let Some(url) = manifest_url {
        config = config.with_manifest_url(url);
    }
    if let Some(secs) = timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }

    Ok(config)
}
