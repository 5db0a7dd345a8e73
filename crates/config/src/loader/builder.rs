//! Environment loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `EnvLoader` collecting the environment name and config directory.
//! - Read, decode and validate the selected environment file in `load()`.
//!
//! Does NOT handle:
//! - Environment variable parsing details (delegated to env.rs).
//! - File name rules (delegated to resolve.rs).
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables.
//! - The config directory is explicit; nothing is resolved relative to the binary or sources.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use std::path::{Path, PathBuf};

use super::env::apply_env;
use super::error::ConfigError;
use super::resolve::{resolve_environment_name, resolve_file_name};
use crate::constants::{DEFAULT_CONFIG_DIR, DOTENV_DISABLED_VAR};
use crate::types::{EnvConfig, Environment};

/// Loader that selects, reads and decodes an `env.<environment>.json` file.
#[derive(Debug, Clone, Default)]
pub struct EnvLoader {
    environment: Option<String>,
    config_dir: Option<PathBuf>,
}

impl EnvLoader {
    /// Create a new loader with no overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(DOTENV_DISABLED_VAR).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the .env file is not loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "Loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Select the environment explicitly instead of reading `ENVIRONMENT`.
    pub fn with_environment(mut self, environment: String) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Set the directory holding the `env.*.json` files.
    pub fn with_config_dir(mut self, dir: PathBuf) -> Self {
        self.config_dir = Some(dir);
        self
    }

    /// Read `ENVIRONMENT` and `ENV_CONFIG_DIR` for any value not set yet.
    pub fn from_env(mut self) -> Self {
        apply_env(&mut self);
        self
    }

    /// The environment name as given, before lower-casing.
    pub fn environment_name(&self) -> Option<&str> {
        self.environment.as_deref()
    }

    /// Directory the environment file is read from.
    pub fn config_dir(&self) -> &Path {
        self.config_dir
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_CONFIG_DIR))
    }

    /// File name selected by the current environment name.
    pub fn file_name(&self) -> String {
        resolve_file_name(self.environment_name())
    }

    /// Full path of the environment file.
    pub fn file_path(&self) -> PathBuf {
        self.config_dir().join(self.file_name())
    }

    /// Read the selected environment file into memory.
    pub fn read_file(&self) -> Result<(PathBuf, Vec<u8>), ConfigError> {
        let path = self.file_path();
        match std::fs::read(&path) {
            Ok(bytes) => {
                tracing::debug!(path = %path.display(), bytes = bytes.len(), "Read environment file");
                Ok((path, bytes))
            }
            Err(source) => Err(ConfigError::Read { path, source }),
        }
    }

    /// Resolve, read, decode and validate the environment file.
    pub fn load(self) -> Result<EnvConfig, ConfigError> {
        let requested = resolve_environment_name(self.environment_name());

        tracing::info!(environment = %requested, "Application running on environment");
        if requested.parse::<Environment>().is_err() {
            tracing::warn!(
                environment = %requested,
                "Environment is not one of development, production, staging, test, docker"
            );
        }

        let (path, bytes) = self.read_file()?;

        let config = match EnvConfig::from_json_slice(&bytes) {
            Ok(config) => config,
            Err(source) => return Err(ConfigError::Parse { path, source }),
        };

        if let Err(problems) = config.validate() {
            return Err(ConfigError::Invalid { path, problems });
        }

        if config.environment.as_str() != requested {
            tracing::warn!(
                requested = %requested,
                declared = %config.environment,
                path = %path.display(),
                "Environment file declares a different environment"
            );
        }

        tracing::info!(path = %path.display(), environment = %config.environment, "Loaded environment configuration");
        Ok(config)
    }

    // Internal accessor methods for use by other loader modules

    pub(crate) fn explicit_config_dir(&self) -> Option<&PathBuf> {
        self.config_dir.as_ref()
    }

    pub(crate) fn set_environment(&mut self, environment: Option<String>) {
        self.environment = environment;
    }

    pub(crate) fn set_config_dir(&mut self, dir: Option<PathBuf>) {
        self.config_dir = dir;
    }
}
