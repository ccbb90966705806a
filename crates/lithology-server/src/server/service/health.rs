//! `grpc.health.v1.Health` for [`LithologyHandler`].
//!
//! The request is never inspected: every `Check`, whatever service name it
//! carries, answers `SERVING`, and `Watch` sends `SERVING` once and then
//! stays open until the client goes away. Nothing the lithology service does
//! can change the reported status.

use crate::server::{service::handler::LithologyHandler, telemetry::increment_health_checks};
use lithology_core::health::{
    HealthCheckRequest, HealthCheckResponse, ServingStatus, health_server::Health,
};
use std::pin::Pin;
use tokio_stream::{Stream, StreamExt};
use tonic::{Request, Response, Status};

type HealthStream = Pin<Box<dyn Stream<Item = Result<HealthCheckResponse, Status>> + Send>>;

fn serving() -> HealthCheckResponse {
    HealthCheckResponse {
        status: ServingStatus::Serving as i32,
    }
}

#[tonic::async_trait]
impl Health for LithologyHandler {
    async fn check(
        &self,
        _req: Request<HealthCheckRequest>,
    ) -> Result<Response<HealthCheckResponse>, Status> {
        increment_health_checks();
        Ok(Response::new(serving()))
    }

    type WatchStream = HealthStream;

    async fn watch(
        &self,
        _req: Request<HealthCheckRequest>,
    ) -> Result<Response<Self::WatchStream>, Status> {
        increment_health_checks();
        let stream = tokio_stream::once(Ok(serving())).chain(tokio_stream::pending());
        Ok(Response::new(Box::pin(stream) as Self::WatchStream))
    }
}
