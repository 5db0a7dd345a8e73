//! The configuration record decoded from `env.<environment>.json`.
//!
//! Responsibilities:
//! - Map the JSON keys of the environment file onto typed fields.
//! - Keep signing keys and the payment API key behind `SecretString`.
//! - Check the required/oneof constraints after decoding.
//!
//! Does NOT handle:
//! - Locating or reading the file (see `loader::builder`).
//!
//! Invariants:
//! - Missing required strings and `appPort` decode to empty/zero and are reported by `validate`.
//! - A missing or unrecognized `environment` is a decode error.
//! - Optional keys decode to `None` only when absent or `null`; `""` stays `Some("")`.
//! - Keys match without regard to case; an exact spelling wins over a case variant.
//! - Unknown keys are ignored.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::environment::Environment;

/// Module for serializing SecretString as strings.
mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }

    pub fn empty() -> SecretString {
        SecretString::new(String::new().into())
    }
}

/// Module for serializing `Option<SecretString>`.
mod optional_secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &Option<SecretString>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret
            .as_ref()
            .map(|s| s.expose_secret())
            .serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value.map(|s| SecretString::new(s.into())))
    }
}

/// JSON keys of the environment file, in their canonical spelling.
const FIELD_KEYS: [&str; 10] = [
    "environment",
    "appPort",
    "databaseURL",
    "redisDatabaseURL",
    "jWTClientAccessTokenSecretKey",
    "jWTMerchantAccessTokenSecretKey",
    "jWTAdminAccessTokenSecretKey",
    "databaseDriver",
    "myFatoorahApiKey",
    "applicationUrl",
];

/// Rename case variants of known keys (`AppPort`, `DATABASEURL`) to their
/// canonical spelling. A key already spelled exactly is never replaced.
fn canonicalize_keys(value: Value) -> Value {
    let Value::Object(map) = value else {
        return value;
    };

    let mut canonical = Map::with_capacity(map.len());
    let mut variants = Vec::new();
    for (key, value) in map {
        match FIELD_KEYS.iter().find(|k| k.eq_ignore_ascii_case(&key)) {
            Some(known) if *known != key => variants.push((known.to_string(), value)),
            _ => {
                canonical.insert(key, value);
            }
        }
    }
    for (key, value) in variants {
        canonical.entry(key).or_insert(value);
    }

    Value::Object(canonical)
}

/// Application settings for one deployment environment.
///
/// Built once at startup and passed down explicitly; nothing mutates it
/// after `EnvLoader::load` returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvConfig {
    /// Deployment context the file was written for.
    pub environment: Environment,

    /// Port the HTTP server binds to.
    #[serde(rename = "appPort", default)]
    pub app_port: u16,

    /// Primary datastore connection string.
    #[serde(rename = "databaseURL", default)]
    pub database_url: String,

    /// Cache datastore connection string.
    #[serde(rename = "redisDatabaseURL", default)]
    pub redis_database_url: String,

    #[serde(
        rename = "jWTClientAccessTokenSecretKey",
        default = "secret_string::empty",
        with = "secret_string"
    )]
    pub jwt_client_access_token_secret_key: SecretString,

    #[serde(
        rename = "jWTMerchantAccessTokenSecretKey",
        default = "secret_string::empty",
        with = "secret_string"
    )]
    pub jwt_merchant_access_token_secret_key: SecretString,

    #[serde(
        rename = "jWTAdminAccessTokenSecretKey",
        default = "secret_string::empty",
        with = "secret_string"
    )]
    pub jwt_admin_access_token_secret_key: SecretString,

    /// Database driver name (e.g. `postgres`).
    #[serde(
        rename = "databaseDriver",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub database_driver: Option<String>,

    /// MyFatoorah payment gateway API key.
    #[serde(
        rename = "myFatoorahApiKey",
        default,
        with = "optional_secret_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub my_fatoorah_api_key: Option<SecretString>,

    /// Public base URL of the application.
    #[serde(
        rename = "applicationUrl",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub application_url: Option<String>,
}

impl EnvConfig {
    /// Decode a record from the raw bytes of an environment file.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_slice(bytes)?;
        serde_json::from_value(canonicalize_keys(value))
    }

    /// Check required and format constraints.
    ///
    /// Every violation is collected so an operator can fix the file in one pass.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut problems = Vec::new();

        if self.app_port == 0 {
            problems.push("appPort is required and must be between 1 and 65535".to_string());
        }

        let required = [
            ("databaseURL", self.database_url.as_str()),
            ("redisDatabaseURL", self.redis_database_url.as_str()),
            (
                "jWTClientAccessTokenSecretKey",
                self.jwt_client_access_token_secret_key.expose_secret(),
            ),
            (
                "jWTMerchantAccessTokenSecretKey",
                self.jwt_merchant_access_token_secret_key.expose_secret(),
            ),
            (
                "jWTAdminAccessTokenSecretKey",
                self.jwt_admin_access_token_secret_key.expose_secret(),
            ),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                problems.push(format!("{key} is required"));
            }
        }

        if let Some(raw) = self.application_url.as_deref().filter(|s| !s.trim().is_empty())
            && let Err(message) = validate_application_url(raw)
        {
            problems.push(format!("applicationUrl {message}"));
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems)
        }
    }
}

/// Require an absolute http(s) URL with a host.
fn validate_application_url(raw: &str) -> Result<(), String> {
    let parsed = url::Url::parse(raw.trim())
        .map_err(|e| format!("must be an absolute http(s) URL (e.g. https://example.com): {e}"))?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(format!("scheme must be http or https, got: {scheme}"));
    }

    if parsed.host_str().is_none() {
        return Err("host is required".to_string());
    }

    Ok(())
}

fn optional_secrets_eq(a: &Option<SecretString>, b: &Option<SecretString>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.expose_secret() == b.expose_secret(),
        (None, None) => true,
        _ => false,
    }
}

// SecretString has no PartialEq; compare exposed values field by field.
impl PartialEq for EnvConfig {
    fn eq(&self, other: &Self) -> bool {
        self.environment == other.environment
            && self.app_port == other.app_port
            && self.database_url == other.database_url
            && self.redis_database_url == other.redis_database_url
            && self.jwt_client_access_token_secret_key.expose_secret()
                == other.jwt_client_access_token_secret_key.expose_secret()
            && self.jwt_merchant_access_token_secret_key.expose_secret()
                == other.jwt_merchant_access_token_secret_key.expose_secret()
            && self.jwt_admin_access_token_secret_key.expose_secret()
                == other.jwt_admin_access_token_secret_key.expose_secret()
            && self.database_driver == other.database_driver
            && optional_secrets_eq(&self.my_fatoorah_api_key, &other.my_fatoorah_api_key)
            && self.application_url == other.application_url
    }
}
