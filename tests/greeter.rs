//! End-to-end tests against a server on an ephemeral port.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;

use helloworld_grpc::pb::greeter_client::GreeterClient;
use helloworld_grpc::pb::greeter_server::GreeterServer;
use helloworld_grpc::pb::HelloRequest;
use helloworld_grpc::interceptor::{RequestIdLayer, TraceLayer};
use helloworld_grpc::GreeterService;

async fn spawn_server() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        Server::builder()
            .layer(RequestIdLayer::new())
            .layer(TraceLayer::new())
            .add_service(GreeterServer::new(GreeterService::default()))
            .serve_with_incoming(TcpListenerStream::new(listener))
            .await
            .unwrap();
    });

    addr
}

async fn say_hello(addr: SocketAddr, name: &str) -> String {
    let mut client = GreeterClient::connect(format!("http://{}", addr))
        .await
        .unwrap();

    let response = client
        .say_hello(HelloRequest {
            name: name.to_string(),
        })
        .await
        .unwrap();

    response.into_inner().message
}

#[tokio::test]
async fn greets_by_name() {
    let addr = spawn_server().await;

    assert_eq!(say_hello(addr, "World").await, "Hello, World!");
    assert_eq!(say_hello(addr, "you").await, "Hello, you!");
}

#[tokio::test]
async fn record_and_replay_probes() {
    let addr = spawn_server().await;

    assert_eq!(say_hello(addr, "record").await, "Hello, record_response!");
    assert_eq!(say_hello(addr, "replay").await, "Hello, replay_response!");
}

#[tokio::test]
async fn empty_name_is_greeted_verbatim() {
    let addr = spawn_server().await;

    assert_eq!(say_hello(addr, "").await, "Hello, !");
}

#[tokio::test]
async fn repeated_calls_are_deterministic() {
    let addr = spawn_server().await;

    let first = say_hello(addr, "repeat").await;
    let second = say_hello(addr, "repeat").await;
    assert_eq!(first, second);
}
