//! Configuration loading.
//!
//! Values come from up to three layers: an optional `.env` file, an optional
//! config file (TOML/YAML/JSON), and environment variables. Environment
//! variables always win.

mod channel;
mod server;

pub use channel::{ChannelConfig, ChannelConfigBuilder};
pub use server::ServerConfig;

use serde::de::DeserializeOwned;
use std::env;
use std::path::{Path, PathBuf};

/// Error type for configuration operations.
#[derive(Debug)]
pub enum ConfigError {
    /// Configuration file not found.
    NotFound(PathBuf),
    /// Failed to parse configuration.
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "Config file not found: {}", path.display()),
            Self::Parse(msg) => write!(f, "Failed to parse config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Configuration builder.
///
/// # Example
///
/// ```ignore
/// let config: ServerConfig = ConfigBuilder::new()
///     .with_dotenv()
///     .with_config_file("config.toml")
///     .build()?;
/// ```
#[derive(Default)]
pub struct ConfigBuilder {
    load_default_dotenv: bool,
    config_file: Option<PathBuf>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load environment variables from `.env` in the current directory.
    pub fn with_dotenv(mut self) -> Self {
        self.load_default_dotenv = true;
        self
    }

    /// Load a TOML/YAML/JSON configuration file. Environment variables still
    /// override values from the file.
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Build and deserialize the configuration.
    pub fn build<C: DeserializeOwned>(self) -> Result<C, ConfigError> {
        if self.load_default_dotenv {
            let _ = dotenvy::dotenv();
        }

        match self.config_file {
            Some(path) => load_config_file(&path),
            None => load_from_env(),
        }
    }
}

/// Load config from environment variables only.
pub fn load_from_env<C: DeserializeOwned>() -> Result<C, ConfigError> {
    use config::Config;

    Config::builder()
        .add_source(EnvSource)
        .build()
        .and_then(|c| c.try_deserialize::<C>())
        .map_err(|e| ConfigError::Parse(e.to_string()))
}

/// Load config from a file with environment variable overrides.
pub fn load_config_file<C: DeserializeOwned>(path: &Path) -> Result<C, ConfigError> {
    use config::{Config, File};

    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    Config::builder()
        .add_source(File::from(path))
        .add_source(EnvSource)
        .build()
        .and_then(|c| c.try_deserialize())
        .map_err(|e| ConfigError::Parse(e.to_string()))
}

/// Environment source that also maps `ENVIRONMENT`/`APP_ENV`/`RUST_ENV` to
/// the `environment` field.
#[derive(Debug, Clone)]
struct EnvSource;

impl config::Source for EnvSource {
    fn clone_into_box(&self) -> Box<dyn config::Source + Send + Sync> {
        Box::new(self.clone())
    }

    fn collect(&self) -> Result<config::Map<String, config::Value>, config::ConfigError> {
        use config::{Environment, Value, ValueKind};

        let mut map = Environment::default()
            .separator("__")
            .try_parsing(true)
            .collect()?;

        if !map.contains_key("environment") {
            if let Ok(val) = env::var("ENVIRONMENT")
                .or_else(|_| env::var("APP_ENV"))
                .or_else(|_| env::var("RUST_ENV"))
            {
                map.insert(
                    "environment".to_string(),
                    Value::new(None, ValueKind::String(val)),
                );
            }
        }

        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Default)]
    #[serde(default)]
    struct TestConfig {
        host: String,
        port: u16,
    }

    #[test]
    fn builder_loads_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "host = \"127.0.0.1\"\nport = 8080\n").unwrap();

        let config: TestConfig = ConfigBuilder::new()
            .with_config_file(&path)
            .build()
            .unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn builder_loads_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "host: \"192.168.1.1\"\nport: 9000\n").unwrap();

        let config: TestConfig = ConfigBuilder::new()
            .with_config_file(&path)
            .build()
            .unwrap();

        assert_eq!(config.host, "192.168.1.1");
        assert_eq!(config.port, 9000);
    }

    #[test]
    fn builder_loads_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"host": "10.0.0.1", "port": 5000}"#).unwrap();

        let config: TestConfig = ConfigBuilder::new()
            .with_config_file(&path)
            .build()
            .unwrap();

        assert_eq!(config.host, "10.0.0.1");
        assert_eq!(config.port, 5000);
    }

    #[test]
    fn missing_file_is_not_found() {
        let result: Result<TestConfig, _> = ConfigBuilder::new()
            .with_config_file("/nonexistent/config.toml")
            .build();

        assert!(matches!(result.unwrap_err(), ConfigError::NotFound(_)));
    }

    #[test]
    fn error_display_names_the_path() {
        let err = ConfigError::NotFound(PathBuf::from("/some/config.toml"));
        assert!(err.to_string().contains("/some/config.toml"));

        let err = ConfigError::Parse("invalid syntax".to_string());
        assert!(err.to_string().contains("invalid syntax"));
    }
}
