//! End-to-end tests against a real server bound to an ephemeral port.

use lithology_core::{
    Error,
    client::LithologyClient,
    health::{HealthCheckRequest, ServingStatus, health_client::HealthClient},
};
use lithology_server::server::{
    delegate::LexiconParser,
    listener::{bind, serve},
    service::handler::LithologyHandler,
};
use std::process::Command;
use tokio::{sync::oneshot, task::JoinHandle};
use tonic::{Code, transport::Channel};

struct TestServer {
    endpoint: String,
    shutdown: oneshot::Sender<()>,
    handle: JoinHandle<anyhow::Result<()>>,
}

async fn start_server() -> TestServer {
    let listener = bind("127.0.0.1:0".parse().unwrap()).await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (shutdown, rx) = oneshot::channel::<()>();
    let handler = LithologyHandler::new(LexiconParser);
    let handle = tokio::spawn(serve(listener, handler, async {
        let _ = rx.await;
    }));
    TestServer {
        endpoint: format!("http://{addr}"),
        shutdown,
        handle,
    }
}

#[tokio::test]
async fn parses_description_over_grpc() {
    let server = start_server().await;
    let mut client = LithologyClient::connect(server.endpoint.clone()).await.unwrap();

    let outcome = client.parse_lithology("moist grey clay, stiff").await;
    assert!(outcome.is_ok(), "unexpected error: {:?}", outcome.error());
    let response = outcome.value();
    assert!(response.soils.contains(&"clay".to_string()));
    assert_eq!(response.moisture, "moist");
    assert_eq!(response.consistency, "stiff");
}

#[tokio::test]
async fn empty_description_returns_error_and_default_body() {
    let server = start_server().await;
    let mut client = LithologyClient::connect(server.endpoint.clone()).await.unwrap();

    let outcome = client.parse_lithology("").await;
    assert!(matches!(
        outcome.error(),
        Some(Error::Rpc {
            code: Code::InvalidArgument,
            ..
        })
    ));
    assert!(outcome.value().soils.is_empty());
    assert_eq!(outcome.value().moisture, "");
    assert_eq!(outcome.value().consistency, "");
}

#[tokio::test]
async fn error_response_still_carries_partial_fields() {
    let server = start_server().await;
    let mut client = LithologyClient::connect(server.endpoint.clone()).await.unwrap();

    let outcome = client.parse_lithology("brown, wet, loose").await;
    assert!(!outcome.is_ok());
    assert_eq!(outcome.value().moisture, "wet");
    assert_eq!(outcome.value().consistency, "loose");
}

#[tokio::test]
async fn health_is_serving_even_after_failures() {
    let server = start_server().await;
    let mut client = LithologyClient::connect(server.endpoint.clone()).await.unwrap();

    assert_eq!(client.check().await.unwrap(), ServingStatus::Serving);

    for _ in 0..3 {
        assert!(!client.parse_lithology("").await.is_ok());
    }
    assert_eq!(client.check().await.unwrap(), ServingStatus::Serving);

    let mut health = health_client(&server.endpoint).await;
    let response = health
        .check(HealthCheckRequest {
            service: "lithology.LithologyService".to_string(),
        })
        .await
        .unwrap()
        .into_inner();
    assert_eq!(response.status, ServingStatus::Serving as i32);
}

async fn health_client(endpoint: &str) -> HealthClient<Channel> {
    let channel = Channel::from_shared(endpoint.to_string())
        .unwrap()
        .connect()
        .await
        .unwrap();
    HealthClient::new(channel)
}

#[tokio::test]
async fn health_check_ignores_requested_service() {
    let server = start_server().await;
    let mut health = health_client(&server.endpoint).await;

    for service in ["", "anything", "grpc.health.v1.Health"] {
        let response = health
            .check(HealthCheckRequest {
                service: service.to_string(),
            })
            .await
            .unwrap()
            .into_inner();
        assert_eq!(response.status(), ServingStatus::Serving, "service {service:?}");
    }
}

#[tokio::test]
async fn health_watch_streams_serving() {
    let server = start_server().await;
    let mut health = health_client(&server.endpoint).await;

    let mut stream = health
        .watch(HealthCheckRequest {
            service: "anything".to_string(),
        })
        .await
        .unwrap()
        .into_inner();
    let first = stream.message().await.unwrap().unwrap();
    assert_eq!(first.status(), ServingStatus::Serving);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_clients_get_their_own_results() {
    let server = start_server().await;
    let cases = [
        ("moist grey clay, stiff", "clay", "moist", "stiff"),
        ("wet sand, loose", "sand", "wet", "loose"),
        ("dry gravel, very dense", "gravel", "dry", "very dense"),
        ("saturated silt, soft", "silt", "saturated", "soft"),
    ];

    let calls = (0..32).map(|i| {
        let endpoint = server.endpoint.clone();
        let case = cases[i % cases.len()];
        tokio::spawn(async move {
            let mut client = LithologyClient::connect(endpoint).await.unwrap();
            let outcome = client.parse_lithology(case.0).await;
            (case, outcome)
        })
    });

    for result in futures::future::join_all(calls).await {
        let ((_, soil, moisture, consistency), outcome) = result.unwrap();
        assert!(outcome.is_ok());
        assert_eq!(outcome.value().soils, vec![soil.to_string()]);
        assert_eq!(outcome.value().moisture, moisture);
        assert_eq!(outcome.value().consistency, consistency);
    }
}

#[tokio::test]
async fn shutdown_signal_stops_server() {
    let server = start_server().await;
    let mut client = LithologyClient::connect(server.endpoint.clone()).await.unwrap();
    assert_eq!(client.check().await.unwrap(), ServingStatus::Serving);
    drop(client);

    server.shutdown.send(()).unwrap();
    let res = tokio::time::timeout(std::time::Duration::from_secs(10), server.handle)
        .await
        .expect("server did not stop")
        .unwrap();
    assert!(res.is_ok());
}

#[tokio::test]
async fn bind_fails_on_occupied_port() {
    let taken = bind("127.0.0.1:0".parse().unwrap()).await.unwrap();
    let addr = taken.local_addr().unwrap();

    let err = bind(addr).await.unwrap_err();
    assert!(err.to_string().contains(&addr.to_string()));
}

#[test]
fn server_process_exits_when_port_is_taken() {
    let taken = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = taken.local_addr().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_lithology-server"))
        .env("SERVER_ADDR", addr.to_string())
        .env("RUST_LOG", "error")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to bind"), "stderr: {stderr}");
}
