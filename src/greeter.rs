//! The `helloworld.Greeter` service implementation.

use tonic::{Request, Response, Status};

use crate::pb::greeter_server::Greeter;
use crate::pb::{HelloReply, HelloRequest};

/// Canned messages returned for the `record` / `replay` probe names.
const RESPONSES: [&str; 2] = ["record_response", "replay_response"];

/// Compute the greeting for a name.
///
/// `record` and `replay` are reserved: they select one of the canned
/// responses. Every other input, the empty string included, is greeted
/// verbatim.
pub fn greeting(name: &str) -> String {
    match name {
        "record" => format!("Hello, {}!", RESPONSES[0]),
        "replay" => format!("Hello, {}!", RESPONSES[1]),
        _ => format!("Hello, {}!", name),
    }
}

/// Greeter service handler. Stateless; a single shared instance serves all
/// connections.
#[derive(Debug, Default, Clone)]
pub struct GreeterService;

#[tonic::async_trait]
impl Greeter for GreeterService {
    async fn say_hello(
        &self,
        request: Request<HelloRequest>,
    ) -> Result<Response<HelloReply>, Status> {
        let name = &request.get_ref().name;
        tracing::debug!(name = %name, "SayHello");

        let reply = HelloReply {
            message: greeting(name),
        };

        Ok(Response::new(reply))
    }
}
