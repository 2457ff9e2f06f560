//! Server bootstrap: service registration, layers, graceful shutdown.

use tonic::transport::Server;

use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::greeter::GreeterService;
use crate::interceptor::{RequestIdLayer, TraceLayer};
use crate::pb;
use crate::pb::greeter_server::GreeterServer;

/// Serve `helloworld.Greeter` until SIGINT/SIGTERM.
///
/// Alongside the greeter this registers the standard gRPC health service
/// (with the greeter reported as SERVING) and server reflection, so the
/// endpoint is discoverable with grpcurl/grpcui without the proto file.
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let addr = config
        .socket_addr()
        .map_err(ServerError::InvalidAddress)?;

    let (mut health_reporter, health_service) = tonic_health::server::health_reporter();
    health_reporter
        .set_serving::<GreeterServer<GreeterService>>()
        .await;

    let reflection_service = tonic_reflection::server::Builder::configure()
        .register_encoded_file_descriptor_set(pb::FILE_DESCRIPTOR_SET)
        .build_v1()
        .map_err(ServerError::Reflection)?;

    tracing::info!(addr = %addr, "gRPC server listening");

    Server::builder()
        .timeout(config.request_timeout())
        .tcp_keepalive(config.tcp_keepalive())
        .tcp_nodelay(config.tcp_nodelay)
        .max_concurrent_streams(config.max_concurrent_streams)
        .layer(RequestIdLayer::new())
        .layer(TraceLayer::new())
        .add_service(health_service)
        .add_service(reflection_service)
        .add_service(GreeterServer::new(GreeterService::default()))
        .serve_with_shutdown(addr, shutdown_signal())
        .await
        .map_err(ServerError::Transport)?;

    tracing::info!("gRPC server shutdown complete");
    Ok(())
}

/// Wait for SIGINT or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received SIGINT, starting graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown...");
        },
    }
}
