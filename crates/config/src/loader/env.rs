//! Environment variable access for the loader.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Values already set on the loader are never overwritten.

use std::path::PathBuf;

use super::builder::EnvLoader;
use crate::constants::{CONFIG_DIR_VAR, ENVIRONMENT_VAR};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Fill unset loader fields from `ENVIRONMENT` and `ENV_CONFIG_DIR`.
pub fn apply_env(loader: &mut EnvLoader) {
    if loader.environment_name().is_none()
        && let Some(environment) = env_var_or_none(ENVIRONMENT_VAR)
    {
        loader.set_environment(Some(environment));
    }
    if loader.explicit_config_dir().is_none()
        && let Some(dir) = env_var_or_none(CONFIG_DIR_VAR)
    {
        loader.set_config_dir(Some(PathBuf::from(dir)));
    }
}
