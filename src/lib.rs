//! # helloworld-grpc
//!
//! A minimal gRPC greeter function: one unary `SayHello` rpc that maps a
//! name to a greeting. The names `record` and `replay` are reserved probes
//! that answer with canned responses instead of echoing the caller.
//!
//! The crate ships two binaries:
//!
//! - `server` - serves `helloworld.Greeter` together with the standard gRPC
//!   health and reflection services, with graceful shutdown on SIGINT/SIGTERM
//! - `client` - a small CLI that issues a single `SayHello` call
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run --bin server
//!
//! # In another terminal:
//! cargo run --bin client
//! grpcurl -plaintext -d '{"name": "World"}' localhost:50051 helloworld.Greeter/SayHello
//! ```
//!
//! Configuration comes from environment variables (optionally via `.env`),
//! e.g. `HOST=0.0.0.0 PORT=50052 LOG_FORMAT=json cargo run --bin server`.

pub mod channel;
pub mod config;
mod environment;
mod error;
pub mod greeter;
pub mod interceptor;
mod logging;
pub mod server;

/// Generated protobuf types for the `helloworld` package.
pub mod pb {
    tonic::include_proto!("helloworld");

    // File descriptor set for server reflection.
    pub const FILE_DESCRIPTOR_SET: &[u8] =
        tonic::include_file_descriptor_set!("helloworld_descriptor");
}

pub use config::{ChannelConfig, ConfigBuilder, ConfigError, ServerConfig};
pub use environment::Environment;
pub use error::{Error, ServerError};
pub use greeter::{greeting, GreeterService};
pub use logging::{init_logging, init_logging_from_env, LogFormat};
