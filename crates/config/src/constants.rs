//! Centralized constants for the Qatarat dashboard configuration.
//!
//! Environment variable names and file naming rules live here so the
//! loader and the CLI agree on them.

// =============================================================================
// Environment Variables
// =============================================================================

/// Selects which `env.<environment>.json` file is loaded.
pub const ENVIRONMENT_VAR: &str = "ENVIRONMENT";

/// Directory that holds the `env.*.json` files.
pub const CONFIG_DIR_VAR: &str = "ENV_CONFIG_DIR";

/// Set to `1` or `true` to skip loading a `.env` file.
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";

// =============================================================================
// File Resolution
// =============================================================================

/// Prefix of every environment file name.
pub const ENV_FILE_PREFIX: &str = "env.";

/// Extension of every environment file name.
pub const ENV_FILE_SUFFIX: &str = ".json";

/// Directory searched when neither a CLI flag nor `ENV_CONFIG_DIR` is given.
pub const DEFAULT_CONFIG_DIR: &str = ".";
