//! Configuration type definitions for the Qatarat dashboard.
//!
//! Responsibilities:
//! - Define the `Environment` tag and the `EnvConfig` record decoded from `env.*.json`.
//! - Provide serialization helpers for secret values.
//! - Enforce the record's required/oneof constraints via `EnvConfig::validate`.
//!
//! Does NOT handle:
//! - Choosing or reading the environment file (see `loader` module).
//!
//! Invariants:
//! - All secret fields use `secrecy::SecretString` to prevent accidental logging.
//! - Serialization helpers (`secret_string`) are private modules.

mod env_config;
mod environment;

pub use env_config::EnvConfig;
pub use environment::{Environment, ParseEnvironmentError};
