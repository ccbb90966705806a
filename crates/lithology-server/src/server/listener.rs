//! Listener bootstrap and lifecycle.
//!
//! The server moves through `NOT_LISTENING -> LISTENING` once [`bind`]
//! succeeds, and from there to `DRAINING -> STOPPED` when the shutdown future
//! passed to [`serve`] resolves. Any bind or serve error is returned to
//! `main`, which exits the process.

use crate::server::service::handler::LithologyHandler;
use anyhow::Context;
use futures::Stream;
use lithology_core::{
    health::health_server::HealthServer,
    proto::{self, lithology_service_server::LithologyServiceServer},
};
use std::future::Future;
use std::net::SocketAddr;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpListener;
use tokio::signal;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::codec::CompressionEncoding;
use tonic::transport::{Server, server::Connected};
use tonic_reflection::server::Builder;
use tonic_web::GrpcWebLayer;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

/// Binds the TCP listener. There is no retry and no fallback port.
pub async fn bind(addr: SocketAddr) -> anyhow::Result<TcpListener> {
    TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))
}

/// Serves both gRPC services on `listener` until `shutdown` resolves.
///
/// In-flight calls are drained before this returns.
pub async fn serve<F>(
    listener: TcpListener,
    handler: LithologyHandler,
    shutdown: F,
) -> anyhow::Result<()>
where
    F: Future<Output = ()>,
{
    serve_with_incoming(TcpListenerStream::new(listener), handler, shutdown).await
}

async fn serve_with_incoming<I, IO, IE, F>(
    incoming: I,
    handler: LithologyHandler,
    shutdown: F,
) -> anyhow::Result<()>
where
    I: Stream<Item = Result<IO, IE>>,
    IO: AsyncRead + AsyncWrite + Connected + Unpin + Send + 'static,
    IE: Into<tower::BoxError>,
    F: Future<Output = ()>,
{
    let reflection = Builder::configure()
        .register_encoded_file_descriptor_set(proto::FILE_DESCRIPTOR_SET)
        .build_v1()
        .context("failed to build reflection service")?;

    Server::builder()
        .accept_http1(true)
        .http2_adaptive_window(Some(true))
        .layer(
            ServiceBuilder::new()
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                )
                .layer(GrpcWebLayer::new()),
        )
        .add_service(HealthServer::new(handler.clone()))
        .add_service(reflection)
        .add_service(build_lithology_service(handler))
        .serve_with_incoming_shutdown(incoming, async {
            shutdown.await;
            tracing::info!("Draining in-flight requests");
        })
        .await
        .context("server terminated")?;

    tracing::info!("Service shut down successfully");
    Ok(())
}

fn build_lithology_service(handler: LithologyHandler) -> LithologyServiceServer<LithologyHandler> {
    LithologyServiceServer::new(handler)
        .send_compressed(CompressionEncoding::Zstd)
        .send_compressed(CompressionEncoding::Gzip)
        .send_compressed(CompressionEncoding::Deflate)
        .accept_compressed(CompressionEncoding::Zstd)
        .accept_compressed(CompressionEncoding::Gzip)
        .accept_compressed(CompressionEncoding::Deflate)
}

/// Resolves on Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!("failed to install SIGTERM handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {err}");
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C signal"),
        () = terminate => tracing::info!("Received SIGTERM signal"),
    }
}
