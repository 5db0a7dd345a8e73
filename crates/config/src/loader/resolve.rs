//! Environment file name resolution.

use crate::constants::{ENV_FILE_PREFIX, ENV_FILE_SUFFIX};
use crate::types::Environment;

/// Normalize an environment name: trimmed and lower-cased.
///
/// `None`, empty and whitespace-only names fall back to the default
/// environment (`development`). Names that are not a recognized environment
/// are passed through; the read fails later if no such file exists.
pub fn resolve_environment_name(environment: Option<&str>) -> String {
    environment
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
        .unwrap_or_else(|| Environment::default().as_str().to_string())
}

/// Map an environment name to its file name.
///
/// `Some("Production")` becomes `env.production.json`; a missing or blank
/// name becomes `env.development.json`.
pub fn resolve_file_name(environment: Option<&str>) -> String {
    let name = resolve_environment_name(environment);
    format!("{ENV_FILE_PREFIX}{name}{ENV_FILE_SUFFIX}")
}
