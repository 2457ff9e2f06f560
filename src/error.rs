//! Crate error types.

use crate::config::ConfigError;

/// Top-level error for the binaries.
#[derive(Debug)]
pub enum Error {
    Config(ConfigError),
    InvalidEndpoint(String),
    Connection(String),
    Server(ServerError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(e) => write!(f, "Configuration error: {}", e),
            Self::InvalidEndpoint(e) => write!(f, "Invalid endpoint: {}", e),
            Self::Connection(e) => write!(f, "Connection error: {}", e),
            Self::Server(e) => write!(f, "Server error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<tonic::transport::Error> for Error {
    fn from(err: tonic::transport::Error) -> Self {
        Self::Connection(err.to_string())
    }
}

impl From<ServerError> for Error {
    fn from(err: ServerError) -> Self {
        Self::Server(err)
    }
}

/// Errors raised while bringing up or running the server.
#[derive(Debug)]
pub enum ServerError {
    InvalidAddress(std::net::AddrParseError),
    Reflection(tonic_reflection::server::Error),
    Transport(tonic::transport::Error),
}

impl std::fmt::Display for ServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidAddress(e) => write!(f, "Invalid address: {}", e),
            Self::Reflection(e) => write!(f, "Failed to build reflection service: {}", e),
            Self::Transport(e) => write!(f, "Transport error: {}", e),
        }
    }
}

impl std::error::Error for ServerError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = Error::InvalidEndpoint("bad url".to_string());
        assert!(err.to_string().contains("Invalid endpoint"));

        let err = Error::Connection("connection refused".to_string());
        assert!(err.to_string().contains("Connection error"));
    }

    #[test]
    fn server_error_display() {
        let parse_err = "not-an-ip:x".parse::<std::net::SocketAddr>().unwrap_err();
        let err = ServerError::InvalidAddress(parse_err);
        assert!(err.to_string().contains("Invalid address"));
    }

    #[test]
    fn config_error_converts() {
        let err: Error = ConfigError::Parse("boom".to_string()).into();
        assert!(matches!(err, Error::Config(_)));
    }
}
