//! Client channel construction.

use tonic::transport::{Channel, Endpoint};

use crate::config::ChannelConfig;
use crate::error::Error;

fn build_endpoint(config: &ChannelConfig) -> Result<Endpoint, Error> {
    let mut endpoint = Endpoint::from_shared(config.endpoint.clone())
        .map_err(|e| Error::InvalidEndpoint(e.to_string()))?
        .timeout(config.timeout())
        .connect_timeout(config.connect_timeout());

    if config.tcp_nodelay {
        endpoint = endpoint.tcp_nodelay(true);
    }
    if let Some(keepalive) = config.tcp_keepalive() {
        endpoint = endpoint.tcp_keepalive(Some(keepalive));
    }
    if let Some(interval) = config.http2_keepalive_interval() {
        endpoint = endpoint.http2_keep_alive_interval(interval);
    }
    if let Some(timeout) = config.http2_keepalive_timeout() {
        endpoint = endpoint.keep_alive_timeout(timeout);
    }

    Ok(endpoint)
}

/// Connect to the server described by `config`.
///
/// The connection is established eagerly; an unreachable server is reported
/// as [`Error::Connection`].
pub async fn connect(config: &ChannelConfig) -> Result<Channel, Error> {
    let endpoint = build_endpoint(config)?;
    endpoint.connect().await.map_err(Error::from)
}
