//! Environment file loader.
//!
//! Responsibilities:
//! - Resolve `env.<environment>.json` from `ENVIRONMENT` (or an explicit override).
//! - Locate the file in an explicit config directory and read it.
//! - Decode and validate the file into an `EnvConfig`.
//! - Optionally load a `.env` file first, gated by `DOTENV_DISABLED`.
//!
//! Does NOT handle:
//! - Terminating the process (the binary maps `ConfigError` to an exit code).
//! - Reloading or watching files; loading happens once at startup.
//!
//! Invariants / Assumptions:
//! - Builder overrides take precedence over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - Unset, empty and whitespace-only variables are treated as unset.

mod builder;
mod env;
mod error;
mod resolve;

#[cfg(test)]
mod tests;

pub use builder::EnvLoader;
pub use env::env_var_or_none;
pub use error::ConfigError;
pub use resolve::{resolve_environment_name, resolve_file_name};
