// Repository trait for the config document and the observation feed
use crate::application::error::FetchError;
use crate::domain::observation::Observation;
use crate::domain::request::DataRequest;
use crate::domain::source::{RemoteConfig, SourceSettings};
use async_trait::async_trait;

#[async_trait]
pub trait ObservationRepository: Send + Sync {
    /// Fetch `config.json` from the host the request came in on
    async fn fetch_config(&self, request: &DataRequest) -> Result<RemoteConfig, FetchError>;

    /// Fetch the raw observations from the configured source, forwarding
    /// the request path and query string
    async fn fetch_observations(
        &self,
        source: &SourceSettings,
        request: &DataRequest,
    ) -> Result<Vec<Observation>, FetchError>;
}
