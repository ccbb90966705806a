//! Typed client for the lithology service.
//!
//! Wraps the generated stubs so that `ParseLithology` failures surface as an
//! [`Outcome`] carrying both the error and the best-effort response the
//! server attached to it.

use crate::{
    Outcome, Result,
    health::{HealthCheckRequest, ServingStatus, health_client::HealthClient},
    proto::{
        LithologyRequest, LithologyResponse, lithology_service_client::LithologyServiceClient,
    },
};
use tonic::transport::Channel;

#[derive(Clone, Debug)]
pub struct LithologyClient {
    lithology: LithologyServiceClient<Channel>,
    health: HealthClient<Channel>,
}

impl LithologyClient {
    /// Connects to `endpoint`, e.g. `http://127.0.0.1:7777`.
    pub async fn connect(endpoint: impl Into<String>) -> Result<Self> {
        let channel = Channel::from_shared(endpoint.into())
            .map_err(|e| crate::Error::Transport {
                context: format!("invalid endpoint: {e}"),
            })?
            .connect()
            .await?;
        Ok(Self::new(channel))
    }

    pub fn new(channel: Channel) -> Self {
        Self {
            lithology: LithologyServiceClient::new(channel.clone()),
            health: HealthClient::new(channel),
        }
    }

    /// Parses `description` remotely.
    ///
    /// Any non-OK status is reported through the outcome's error; the value
    /// is whatever the server attached, or a default response if nothing
    /// was attached (for example when the server was unreachable).
    pub async fn parse_lithology(
        &mut self,
        description: impl Into<String>,
    ) -> Outcome<LithologyResponse> {
        let request = LithologyRequest {
            description: description.into(),
        };
        Outcome::from_response(self.lithology.parse_lithology(request).await)
    }

    /// Queries the health service.
    pub async fn check(&mut self) -> Result<ServingStatus> {
        let response = self
            .health
            .check(HealthCheckRequest {
                service: String::new(),
            })
            .await?
            .into_inner();
        Ok(response.status())
    }
}
