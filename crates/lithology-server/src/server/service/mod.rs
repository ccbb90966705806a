//! gRPC service implementation.
//!
//! ## Structure
//!
//! - [`handler`] - gRPC service entry point (`LithologyHandler`).
//! - [`health`] - `grpc.health.v1.Health` on the same handler.

pub mod handler;
pub mod health;
