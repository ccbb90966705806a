//! # `lithology-server`
//!
//! gRPC front end for lithology description parsing.
//!
//! The binary registers a [`LithologyHandler`](server::service::handler::LithologyHandler)
//! for `lithology.LithologyService` and a `grpc.health.v1.Health` service on a
//! single listener (port `7777` by default). All text analysis is delegated to
//! a [`SoilDescriptionParser`](lithology_core::SoilDescriptionParser); the
//! binary wires in the lexicon-based parser from `soil-terms`.

pub mod server;
