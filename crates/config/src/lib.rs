//! Environment configuration for the Qatarat dashboard backend.
//!
//! This crate selects `env.<environment>.json` from the `ENVIRONMENT`
//! variable, decodes it into an [`EnvConfig`] and validates it. The record
//! is returned by value to the caller; there is no global configuration state.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{
    ConfigError, EnvLoader, env_var_or_none, resolve_environment_name, resolve_file_name,
};
pub use types::{EnvConfig, Environment, ParseEnvironmentError};
