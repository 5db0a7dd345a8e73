//! Qatarat dashboard entry point.
//!
//! Responsibilities:
//! - Load `.env`, parse CLI flags and install logging.
//! - Load the environment configuration once and report which environment is running.
//! - Turn configuration failures into a diagnostic on stderr and a non-zero exit code.
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` can provide `ENVIRONMENT`.
//! - Logs go to stderr; stdout only carries the result line.

mod args;
mod error;

use anyhow::Context;
use args::Cli;
use clap::Parser;
use error::{ExitCode, ExitCodeExt};
use qatarat_config::{EnvConfig, EnvLoader};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    if let Err(e) = EnvLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::from(&e).as_i32());
    }

    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let env = match load_config(&cli) {
        Ok(env) => env,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(e.exit_code().as_i32());
        }
    };

    println!("Running in environment: {}", env.environment);
}

/// Build the loader from CLI flags and environment variables, then load.
fn load_config(cli: &Cli) -> anyhow::Result<EnvConfig> {
    let mut loader = EnvLoader::new();

    // Blank flag values are ignored to allow fallback to env vars
    if let Some(environment) = cli.environment.as_deref().map(str::trim)
        && !environment.is_empty()
    {
        loader = loader.with_environment(environment.to_string());
    }
    if let Some(dir) = &cli.config_dir
        && !dir.as_os_str().is_empty()
    {
        loader = loader.with_config_dir(dir.clone());
    }

    let loader = loader.from_env();
    tracing::debug!(path = %loader.file_path().display(), "Resolved environment file");

    loader
        .load()
        .context("Failed to load environment configuration")
}
