//! gRPC service implementation for lithology parsing.
//!
//! This module defines [`LithologyHandler`], the concrete implementation of
//! the `LithologyService` gRPC service defined in `lithology.proto`.
//!
//! ## Responsibilities
//!
//! - Forward each description to the parsing delegate, once for structured
//!   properties and once for soil terms.
//! - Copy the delegate output into a `LithologyResponse`.
//! - Log delegate failures and return them to the caller together with the
//!   best-effort response.
//!
//! The handler keeps no per-call or cross-call state, so a failed call never
//! affects later ones.

use crate::server::telemetry::{
    increment_property_failures, increment_requests, increment_term_failures,
    record_parse_duration,
};
use lithology_core::{
    Outcome, SoilDescriptionParser,
    proto::{LithologyRequest, LithologyResponse, lithology_service_server::LithologyService},
};
use std::sync::Arc;
use tonic::{Request, Response, Status};

/// Stateless gRPC handler for `lithology.LithologyService`.
///
/// Cloning is cheap; all clones share the same read-only delegate.
#[derive(Clone)]
pub struct LithologyHandler {
    parser: Arc<dyn SoilDescriptionParser>,
}

impl LithologyHandler {
    pub fn new(parser: impl SoilDescriptionParser) -> Self {
        Self {
            parser: Arc::new(parser),
        }
    }

    /// Parses `description` with the delegate.
    ///
    /// Property extraction runs first, then term extraction. Either failure is
    /// logged; a term failure degrades `soils` to an empty list. When both
    /// fail, the property error is the one reported.
    pub fn parse(&self, description: &str) -> Outcome<LithologyResponse> {
        let properties = self.parser.parse_properties(description);
        if let Some(err) = properties.error() {
            increment_property_failures();
            tracing::warn!(error = %err, "error parsing soil description for properties");
        }

        let (soils, term_err) = match self.parser.parse_terms(description) {
            Ok(soils) => (soils, None),
            Err(err) => {
                increment_term_failures();
                tracing::warn!(error = %err, "error parsing soil description for terms");
                (Vec::new(), Some(err))
            }
        };

        let outcome = properties.map(|properties| LithologyResponse {
            soils,
            moisture: properties.moisture,
            consistency: properties.consistency,
        });
        match term_err {
            Some(err) => outcome.or_error(err),
            None => outcome,
        }
    }
}

#[tonic::async_trait]
impl LithologyService for LithologyHandler {
    #[tracing::instrument(skip_all, fields(len = req.get_ref().description.len()))]
    async fn parse_lithology(
        &self,
        req: Request<LithologyRequest>,
    ) -> Result<Response<LithologyResponse>, Status> {
        let start = std::time::Instant::now();
        increment_requests();

        let outcome = self.parse(&req.get_ref().description);

        record_parse_duration(start.elapsed().as_secs_f64() * 1000.0);
        outcome.into_response()
    }
}
