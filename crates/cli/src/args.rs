//! CLI argument definitions and parsing.
//!
//! Non-responsibilities:
//! - Does not read `ENVIRONMENT` or `ENV_CONFIG_DIR`; `EnvLoader::from_env` owns those.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "qatarat")]
#[command(about = "Qatarat dashboard backend - loads env.<environment>.json and reports the environment", long_about = None)]
#[command(version)]
#[command(
    after_help = "Environment:\n  ENVIRONMENT      development | production | staging | test | docker (default: development)\n  ENV_CONFIG_DIR   directory holding env.*.json (default: current directory)\n  DOTENV_DISABLED  set to 1 to skip loading .env\n  RUST_LOG         log filter (default: info)\n"
)]
pub struct Cli {
    /// Environment to load, overriding ENVIRONMENT
    #[arg(short, long)]
    pub environment: Option<String>,

    /// Directory containing env.<environment>.json, overriding ENV_CONFIG_DIR
    #[arg(short = 'c', long)]
    pub config_dir: Option<PathBuf>,
}
