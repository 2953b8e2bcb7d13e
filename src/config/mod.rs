mod loader;
pub mod value;
mod vcap;

use std::collections::HashMap;
use std::path::Path;

pub use value::{ConfigValue, FromConfigValue};

/// Error type for configuration operations.
#[derive(Debug)]
pub enum ConfigError {
    /// The requested key was not found in the configuration.
    NotFound(String),
    /// The value could not be converted to the requested type.
    TypeMismatch { key: String, expected: &'static str },
    /// An I/O or YAML parsing error occurred while loading config files.
    Load(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NotFound(key) => write!(f, "Config key not found: {key}"),
            ConfigError::TypeMismatch { key, expected } => {
                write!(f, "Config type mismatch for '{key}': expected {expected}")
            }
            ConfigError::Load(msg) => write!(f, "Config load error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Externalized application configuration.
///
/// Resolution order (lowest to highest priority):
/// 1. `application.yaml` (base)
/// 2. `application-{profile}.yaml` (profile override)
/// 3. Cloud Foundry `VCAP_APPLICATION` / `VCAP_SERVICES` metadata
/// 4. Environment variables (`APPLICATION_GREETING_MESSAGE` overrides
///    `application.greeting.message`), including variables loaded from
///    `.env` / `.env.{profile}` files — those never overwrite variables
///    that are already set
///
/// Profile is determined by: `GREETER_PROFILE` env var > argument > `"dev"`.
#[derive(Debug, Clone)]
pub struct GreeterConfig {
    values: HashMap<String, ConfigValue>,
    profile: String,
}

impl GreeterConfig {
    /// Load configuration for the given profile.
    ///
    /// Looks for `application.yaml` and `application-{profile}.yaml` in the
    /// current working directory, then overlays VCAP metadata and
    /// environment variables. Missing files are fine; `load` only fails on
    /// unreadable or malformed YAML.
    pub fn load(profile: &str) -> Result<Self, ConfigError> {
        let active_profile =
            std::env::var("GREETER_PROFILE").unwrap_or_else(|_| profile.to_string());

        let mut values = HashMap::new();

        loader::load_yaml_file(Path::new("application.yaml"), &mut values)?;
        let profile_path = format!("application-{active_profile}.yaml");
        loader::load_yaml_file(Path::new(&profile_path), &mut values)?;

        let _ = dotenvy::dotenv();
        let _ = dotenvy::from_filename(format!(".env.{active_profile}"));

        vcap::overlay_from_env(&mut values);

        // Convention: `application.greeting.message` <-> `APPLICATION_GREETING_MESSAGE`
        for (env_key, env_val) in std::env::vars() {
            let config_key = env_key.to_lowercase().replace('_', ".");
            values.insert(config_key, ConfigValue::String(env_val));
        }

        Ok(GreeterConfig {
            values,
            profile: active_profile,
        })
    }

    /// Create a config from a YAML string (useful for testing).
    pub fn from_yaml_str(yaml: &str, profile: &str) -> Result<Self, ConfigError> {
        let mut values = HashMap::new();
        loader::load_yaml_str(yaml, &mut values)?;
        Ok(GreeterConfig {
            values,
            profile: profile.to_string(),
        })
    }

    /// Create an empty config (useful for testing).
    pub fn empty() -> Self {
        GreeterConfig {
            values: HashMap::new(),
            profile: "test".to_string(),
        }
    }

    /// Set a value programmatically.
    pub fn set(&mut self, key: &str, value: ConfigValue) {
        self.values.insert(key.to_string(), value);
    }

    /// Get a typed value for the given dot-separated key.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the key does not exist, or
    /// `ConfigError::TypeMismatch` if the value cannot be converted.
    pub fn get<V: FromConfigValue>(&self, key: &str) -> Result<V, ConfigError> {
        let value = self
            .values
            .get(key)
            .ok_or_else(|| ConfigError::NotFound(key.to_string()))?;
        V::from_config_value(value, key)
    }

    /// Get a typed value, returning a default if the key is missing.
    ///
    /// An absent key is not an error; the default is substituted silently.
    pub fn get_or<V: FromConfigValue>(&self, key: &str, default: V) -> V {
        self.get(key).unwrap_or(default)
    }

    /// Check whether a key exists in the config.
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// The active profile name.
    pub fn profile(&self) -> &str {
        &self.profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_is_not_found() {
        let config = GreeterConfig::empty();
        let err = config.get::<String>("application.greeting.message").unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn get_or_substitutes_the_default() {
        let config = GreeterConfig::empty();
        let value = config.get_or("application.number.value", "0".to_string());
        assert_eq!(value, "0");
    }

    #[test]
    fn yaml_values_resolve_by_dot_key() {
        let config = GreeterConfig::from_yaml_str(
            "application:\n  greeting:\n    message: hi\n",
            "test",
        )
        .unwrap();
        let value: String = config.get("application.greeting.message").unwrap();
        assert_eq!(value, "hi");
    }

    #[test]
    fn set_overrides_a_loaded_value() {
        let mut config =
            GreeterConfig::from_yaml_str("server:\n  port: 8080\n", "test").unwrap();
        config.set("server.port", ConfigValue::Integer(9090));
        let port: u16 = config.get("server.port").unwrap();
        assert_eq!(port, 9090);
    }

    #[test]
    fn numeric_yaml_values_read_back_as_strings() {
        let config =
            GreeterConfig::from_yaml_str("application:\n  number:\n    value: 42\n", "test")
                .unwrap();
        let value: String = config.get("application.number.value").unwrap();
        assert_eq!(value, "42");
    }
}
