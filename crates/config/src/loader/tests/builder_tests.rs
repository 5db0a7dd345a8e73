//! Builder precedence and path resolution tests.

use serial_test::serial;
use std::path::{Path, PathBuf};

use super::env_lock;
use crate::loader::builder::EnvLoader;

#[test]
fn test_defaults_to_development_in_working_directory() {
    let loader = EnvLoader::new();

    assert_eq!(loader.environment_name(), None);
    assert_eq!(loader.config_dir(), Path::new("."));
    assert_eq!(loader.file_name(), "env.development.json");
    assert_eq!(loader.file_path(), PathBuf::from("./env.development.json"));
}

#[test]
fn test_explicit_environment_and_dir() {
    let loader = EnvLoader::new()
        .with_environment("Production".to_string())
        .with_config_dir(PathBuf::from("/etc/qatarat"));

    assert_eq!(loader.environment_name(), Some("Production"));
    assert_eq!(loader.file_name(), "env.production.json");
    assert_eq!(
        loader.file_path(),
        PathBuf::from("/etc/qatarat/env.production.json")
    );
}

#[test]
#[serial]
fn test_from_env_reads_environment_and_config_dir() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            ("ENVIRONMENT", Some("STAGING")),
            ("ENV_CONFIG_DIR", Some("/srv/config")),
        ],
        || {
            let loader = EnvLoader::new().from_env();

            assert_eq!(loader.environment_name(), Some("STAGING"));
            assert_eq!(
                loader.file_path(),
                PathBuf::from("/srv/config/env.staging.json")
            );
        },
    );
}

#[test]
#[serial]
fn test_builder_overrides_take_precedence_over_env() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            ("ENVIRONMENT", Some("production")),
            ("ENV_CONFIG_DIR", Some("/srv/config")),
        ],
        || {
            let loader = EnvLoader::new()
                .with_environment("test".to_string())
                .with_config_dir(PathBuf::from("fixtures"))
                .from_env();

            assert_eq!(loader.file_path(), PathBuf::from("fixtures/env.test.json"));
        },
    );
}

#[test]
#[serial]
fn test_blank_env_vars_fall_back_to_defaults() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [("ENVIRONMENT", Some("   ")), ("ENV_CONFIG_DIR", Some(""))],
        || {
            let loader = EnvLoader::new().from_env();

            assert_eq!(loader.environment_name(), None);
            assert_eq!(loader.config_dir(), Path::new("."));
            assert_eq!(loader.file_name(), "env.development.json");
        },
    );
}

#[test]
#[serial]
fn test_unset_environment_falls_back_to_development() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars_unset(["ENVIRONMENT", "ENV_CONFIG_DIR"], || {
        let loader = EnvLoader::new().from_env();
        assert_eq!(loader.file_name(), "env.development.json");
    });
}
