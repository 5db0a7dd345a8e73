//! CLI exit codes for scripting and automation.
//!
//! Invariants:
//! - Every configuration failure exits non-zero.
//! - File-access, decode and validation failures have distinct codes.

use qatarat_config::ConfigError;

/// Structured exit codes for the qatarat binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Configuration loaded and reported.
    #[allow(dead_code)]
    Success = 0,

    /// General error - `.env` failures and anything not classified below.
    GeneralError = 1,

    /// The environment file could not be read (missing, permissions).
    FileAccess = 2,

    /// The environment file is not valid JSON for the configuration record.
    DecodeError = 3,

    /// The file decoded but required values are missing or malformed.
    ValidationError = 4,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::Read { .. } => ExitCode::FileAccess,
            ConfigError::Parse { .. } => ExitCode::DecodeError,
            ConfigError::Invalid { .. } => ExitCode::ValidationError,
            ConfigError::DotenvParse { .. }
            | ConfigError::DotenvIo { .. }
            | ConfigError::DotenvUnknown => ExitCode::GeneralError,
        }
    }
}

/// Extension trait to pick an exit code for an `anyhow::Error`.
pub trait ExitCodeExt {
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.downcast_ref::<ConfigError>()
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use std::path::PathBuf;

    fn read_error() -> ConfigError {
        ConfigError::Read {
            path: PathBuf::from("env.production.json"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        }
    }

    #[test]
    fn test_config_errors_map_to_distinct_codes() {
        let parse = ConfigError::Parse {
            path: PathBuf::from("env.test.json"),
            source: serde_json::from_str::<serde_json::Value>("{").unwrap_err(),
        };
        let invalid = ConfigError::Invalid {
            path: PathBuf::from("env.test.json"),
            problems: vec!["appPort is required".to_string()],
        };

        assert_eq!(ExitCode::from(&read_error()), ExitCode::FileAccess);
        assert_eq!(ExitCode::from(&parse), ExitCode::DecodeError);
        assert_eq!(ExitCode::from(&invalid), ExitCode::ValidationError);
        assert_eq!(
            ExitCode::from(&ConfigError::DotenvParse { error_index: 3 }),
            ExitCode::GeneralError
        );
    }

    #[test]
    fn test_exit_code_survives_anyhow_context() {
        let err = Err::<(), _>(read_error())
            .context("Failed to load environment configuration")
            .unwrap_err();

        assert_eq!(err.exit_code(), ExitCode::FileAccess);
        assert_eq!(err.exit_code().as_i32(), 2);
    }

    #[test]
    fn test_unclassified_errors_are_general() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(err.exit_code(), ExitCode::GeneralError);
    }
}
