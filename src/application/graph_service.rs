// Graph service - Use case for rendering one chart from the remote feed
use crate::application::error::GraphError;
use crate::application::observation_repository::ObservationRepository;
use crate::application::pivot::pivot;
use crate::domain::chart::{ChartData, ChartOptions};
use crate::domain::request::DataRequest;
use std::sync::Arc;

#[derive(Clone)]
pub struct GraphService {
    repository: Arc<dyn ObservationRepository>,
    options: ChartOptions,
}

impl GraphService {
    pub fn new(repository: Arc<dyn ObservationRepository>, options: ChartOptions) -> Self {
        Self {
            repository,
            options,
        }
    }

    /// Load config, then data, then pivot. The period is checked before
    /// anything is fetched.
    pub async fn render(&self, request: &DataRequest) -> Result<ChartData, GraphError> {
        let period = request.period()?;

        let config = self
            .repository
            .fetch_config(request)
            .await
            .map_err(GraphError::ConfigFetch)?;

        let observations = self
            .repository
            .fetch_observations(&config.source, request)
            .await
            .map_err(GraphError::DataFetch)?;

        let chart = pivot(&observations, period, &self.options);
        if chart.is_empty() {
            tracing::debug!("No observations for period {} at {}", period, request.path);
        } else {
            tracing::debug!(
                "Rendered {} observations for period {} into {} buckets x {} series",
                observations.len(),
                period,
                chart.labels.len(),
                chart.datasets.len()
            );
        }

        Ok(chart)
    }
}
