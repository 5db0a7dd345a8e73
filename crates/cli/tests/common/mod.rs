//! Shared test utilities for qatarat integration tests.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.
//! - Environment files are written into a per-test `TempDir`.

use assert_cmd::Command;
use std::fs;
use std::path::Path;

/// Returns a hermetic `qatarat` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `ENVIRONMENT` and `ENV_CONFIG_DIR` are cleared to avoid host leakage.
/// - `RUST_LOG` is cleared so logging uses the binary's default filter.
pub fn qatarat_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("qatarat");

    cmd.env("DOTENV_DISABLED", "1");
    cmd.env_remove("ENVIRONMENT")
        .env_remove("ENV_CONFIG_DIR")
        .env_remove("RUST_LOG");

    cmd
}

/// A complete, valid environment file for `environment`.
pub fn valid_env_json(environment: &str) -> String {
    serde_json::json!({
        "environment": environment,
        "appPort": 8080,
        "databaseURL": "postgres://app:pw@localhost:5432/qatarat",
        "redisDatabaseURL": "redis://localhost:6379/0",
        "jWTClientAccessTokenSecretKey": "client-secret",
        "jWTMerchantAccessTokenSecretKey": "merchant-secret",
        "jWTAdminAccessTokenSecretKey": "admin-secret",
        "databaseDriver": "postgres",
        "myFatoorahApiKey": "mf-test-key",
        "applicationUrl": "http://localhost:8080"
    })
    .to_string()
}

/// Write `env.<name>.json` into `dir`.
pub fn write_env_file(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(format!("env.{name}.json")), contents).unwrap();
}
