//! Tests for the environment loader.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub mod builder_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// A complete, valid environment file for `environment`.
pub fn valid_env_json(environment: &str) -> String {
    format!(
        r#"{{
    "environment": "{environment}",
    "appPort": 8080,
    "databaseURL": "postgres://app:pw@localhost:5432/qatarat",
    "redisDatabaseURL": "redis://localhost:6379/0",
    "jWTClientAccessTokenSecretKey": "client-secret",
    "jWTMerchantAccessTokenSecretKey": "merchant-secret",
    "jWTAdminAccessTokenSecretKey": "admin-secret",
    "databaseDriver": "postgres",
    "applicationUrl": "http://localhost:8080"
}}"#
    )
}

/// Write `env.<name>.json` into `dir` and return its path.
pub fn write_env_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(format!("env.{name}.json"));
    fs::write(&path, contents).unwrap();
    path
}
