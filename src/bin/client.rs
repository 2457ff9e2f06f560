//! Greeter client binary.
//!
//! Issues a single `SayHello` call and prints the reply:
//!
//! ```bash
//! cargo run --bin client
//! cargo run --bin client -- --server localhost --port 50051
//!
//! # Ask for the canned probe responses:
//! cargo run --bin client -- rec
//! cargo run --bin client -- rep
//! ```

use clap::{Parser, ValueEnum};

use helloworld_grpc::pb::greeter_client::GreeterClient;
use helloworld_grpc::pb::HelloRequest;
use helloworld_grpc::{channel, init_logging_from_env, ChannelConfig};

/// Probe mode selecting one of the reserved names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Send the name `record`.
    Rec,
    /// Send the name `replay`.
    Rep,
}

#[derive(Debug, Parser)]
#[clap(version, about = "Greeter client")]
struct Args {
    /// Server host, with or without an http:// prefix.
    #[arg(short, long, default_value = "localhost")]
    server: String,

    /// Server port.
    #[arg(short, long, default_value_t = 50051)]
    port: u16,

    /// Optional probe mode.
    #[arg(value_enum)]
    mode: Option<Mode>,
}

impl Args {
    fn endpoint(&self) -> String {
        let host = self.server.strip_prefix("http://").unwrap_or(&self.server);
        format!("http://{}:{}", host, self.port)
    }

    fn name(&self) -> &'static str {
        match self.mode {
            Some(Mode::Rec) => "record",
            Some(Mode::Rep) => "replay",
            None => "you",
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging_from_env();
    let args = Args::parse();

    let config: ChannelConfig = ChannelConfig::builder()
        .endpoint(args.endpoint())
        .build()?;

    tracing::info!(endpoint = %config.endpoint, "Connecting to greeter server");

    let channel = channel::connect(&config).await?;
    let mut client = GreeterClient::new(channel);

    let response = client
        .say_hello(HelloRequest {
            name: args.name().to_string(),
        })
        .await?;

    println!("Greeter client received: {}", response.get_ref().message);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn default_target_and_name() {
        let args = args(&["client"]);
        assert_eq!(args.endpoint(), "http://localhost:50051");
        assert_eq!(args.name(), "you");
    }

    #[test]
    fn http_prefix_is_normalized() {
        let args = args(&["client", "--server", "http://example.com", "--port", "9000"]);
        assert_eq!(args.endpoint(), "http://example.com:9000");
    }

    #[test]
    fn probe_modes_select_reserved_names() {
        assert_eq!(args(&["client", "rec"]).name(), "record");
        assert_eq!(args(&["client", "rep"]).name(), "replay");
    }

    #[test]
    fn unknown_mode_is_rejected() {
        assert!(Args::try_parse_from(["client", "bogus"]).is_err());
    }
}
