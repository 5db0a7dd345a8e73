//! Deployment environment tag.
//!
//! Invariants:
//! - Serialized form is always the lower-case name.
//! - Parsing from strings is case-insensitive and ignores surrounding whitespace.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The deployment context selecting which environment file is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
    Staging,
    Test,
    Docker,
}

impl Environment {
    /// Every recognized environment, in declaration order.
    pub const ALL: [Environment; 5] = [
        Environment::Development,
        Environment::Production,
        Environment::Staging,
        Environment::Test,
        Environment::Docker,
    ];

    /// Lower-case name as used in file names and JSON.
    pub const fn as_str(self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
            Environment::Staging => "staging",
            Environment::Test => "test",
            Environment::Docker => "docker",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a recognized environment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown environment '{value}' (expected one of: development, production, staging, test, docker)")]
pub struct ParseEnvironmentError {
    pub value: String,
}

impl FromStr for Environment {
    type Err = ParseEnvironmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Environment::ALL
            .into_iter()
            .find(|env| env.as_str() == normalized)
            .ok_or_else(|| ParseEnvironmentError {
                value: s.to_string(),
            })
    }
}
