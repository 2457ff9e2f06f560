//! gRPC client channel configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{ConfigBuilder, ConfigError};

/// Configuration for the client channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelConfig {
    /// Service endpoint URL.
    pub endpoint: String,
    /// Connection timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// TCP keepalive interval in seconds.
    pub tcp_keepalive_secs: Option<u64>,
    /// Enable TCP nodelay.
    pub tcp_nodelay: bool,
    /// HTTP/2 keep-alive interval in seconds.
    pub http2_keepalive_interval_secs: Option<u64>,
    /// HTTP/2 keep-alive timeout in seconds.
    pub http2_keepalive_timeout_secs: Option<u64>,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://[::1]:50051".to_string(),
            connect_timeout_secs: 10,
            timeout_secs: 30,
            tcp_keepalive_secs: Some(60),
            tcp_nodelay: true,
            http2_keepalive_interval_secs: Some(30),
            http2_keepalive_timeout_secs: Some(20),
        }
    }
}

impl ChannelConfig {
    /// Create a new configuration builder.
    pub fn builder() -> ChannelConfigBuilder {
        ChannelConfigBuilder::new()
    }

    /// The connection timeout duration.
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// The request timeout duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The TCP keepalive duration.
    pub fn tcp_keepalive(&self) -> Option<Duration> {
        self.tcp_keepalive_secs.map(Duration::from_secs)
    }

    /// The HTTP/2 keep-alive interval.
    pub fn http2_keepalive_interval(&self) -> Option<Duration> {
        self.http2_keepalive_interval_secs.map(Duration::from_secs)
    }

    /// The HTTP/2 keep-alive timeout.
    pub fn http2_keepalive_timeout(&self) -> Option<Duration> {
        self.http2_keepalive_timeout_secs.map(Duration::from_secs)
    }
}

/// Builder for [`ChannelConfig`] with programmatic overrides on top of the
/// env/file layers.
#[derive(Default)]
pub struct ChannelConfigBuilder {
    inner: ConfigBuilder,
    endpoint: Option<String>,
    timeout_secs: Option<u64>,
    connect_timeout_secs: Option<u64>,
}

impl ChannelConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load environment variables from `.env`.
    pub fn with_dotenv(mut self) -> Self {
        self.inner = self.inner.with_dotenv();
        self
    }

    /// Load a configuration file.
    pub fn with_config_file(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.inner = self.inner.with_config_file(path);
        self
    }

    /// Set the endpoint URL.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the request timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Set the connection timeout in seconds.
    pub fn connect_timeout_secs(mut self, secs: u64) -> Self {
        self.connect_timeout_secs = Some(secs);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> Result<ChannelConfig, ConfigError> {
        let mut config: ChannelConfig = self.inner.build()?;

        if let Some(endpoint) = self.endpoint {
            config.endpoint = endpoint;
        }
        if let Some(timeout) = self.timeout_secs {
            config.timeout_secs = timeout;
        }
        if let Some(connect_timeout) = self.connect_timeout_secs {
            config.connect_timeout_secs = connect_timeout;
        }

        Ok(config)
    }
}
