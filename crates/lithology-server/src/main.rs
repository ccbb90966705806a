//! # `lithology-server`
//!
//! Serves `lithology.LithologyService` and `grpc.health.v1.Health` on one TCP
//! port (7777 unless `SERVER_ADDR` says otherwise).
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin lithology-server --release
//! SERVER_ADDR=127.0.0.1:9000 cargo run --bin lithology-server
//! ```

use clap::Parser;
use lithology_server::server::{
    config::{CliArgs, ServerConfig},
    delegate::LexiconParser,
    listener::{bind, serve, shutdown_signal},
    service::handler::LithologyHandler,
    telemetry::init_telemetry,
};
use std::net::SocketAddr;

// Using mimalloc for better performance under contention, especially in musl
// environments.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    let config = ServerConfig::try_from(args)?;

    let providers = init_telemetry()?;

    let listener = match bind(config.server_addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("Failed to start listener: {err:#}");
            providers.shutdown();
            return Err(err);
        }
    };
    log_startup_info(listener.local_addr().unwrap_or(config.server_addr), &config);

    let handler = LithologyHandler::new(LexiconParser);
    let res = serve(listener, handler, shutdown_signal()).await;
    if let Err(err) = &res {
        tracing::error!("Failed to serve: {err:#}");
    }

    providers.shutdown();
    res
}

fn log_startup_info(addr: SocketAddr, config: &ServerConfig) {
    if cfg!(debug_assertions) {
        tracing::info!("Listening on {} with full config: {:#?}", addr, config);
    } else {
        tracing::info!("Listening on {}", addr);
    }
}
