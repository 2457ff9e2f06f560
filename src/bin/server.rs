//! Greeter server binary.
//!
//! ```bash
//! cargo run --bin server
//!
//! # Check it:
//! grpcurl -plaintext -d '{"name": "World"}' localhost:50051 helloworld.Greeter/SayHello
//! grpcurl -plaintext localhost:50051 grpc.health.v1.Health/Check
//! ```

use helloworld_grpc::{init_logging_from_env, server, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging_from_env();

    let config: ServerConfig = ServerConfig::builder().with_dotenv().build()?;

    tracing::info!(
        host = %config.host,
        port = %config.port,
        environment = ?config.environment,
        "Starting greeter server"
    );

    server::run(config).await?;

    Ok(())
}
