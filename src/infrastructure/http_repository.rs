// HTTP repository implementation - JSON over plain GET
use crate::application::error::FetchError;
use crate::application::observation_repository::ObservationRepository;
use crate::domain::observation::Observation;
use crate::domain::request::DataRequest;
use crate::domain::source::{RemoteConfig, SourceSettings};
use async_trait::async_trait;
use reqwest::header;
use serde::de::DeserializeOwned;

#[derive(Debug, Clone)]
pub struct HttpObservationRepository {
    client: reqwest::Client,
    origin: Option<String>,
    config_path: String,
}

impl HttpObservationRepository {
    pub fn new(origin: Option<String>, config_path: String) -> Self {
        Self::with_client(reqwest::Client::new(), origin, config_path)
    }

    pub fn with_client(client: reqwest::Client, origin: Option<String>, config_path: String) -> Self {
        Self {
            client,
            origin: origin.map(|o| o.trim_end_matches('/').to_string()),
            config_path,
        }
    }

    fn config_url(&self, request: &DataRequest) -> String {
        match &self.origin {
            Some(origin) => format!("{}{}", origin, self.config_path),
            None => format!("http://{}{}", request.host, self.config_path),
        }
    }

    fn data_url(source: &SourceSettings, request: &DataRequest) -> String {
        let mut url = format!("{}{}", source.base_url(request.hostname()), request.path);
        let query = request.query_string();
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status { status, body });
        }

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        if !content_type
            .as_deref()
            .is_some_and(|ct| ct.contains("application/json"))
        {
            return Err(FetchError::NotJson { content_type });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl ObservationRepository for HttpObservationRepository {
    async fn fetch_config(&self, request: &DataRequest) -> Result<RemoteConfig, FetchError> {
        let config: RemoteConfig = self.get_json(&self.config_url(request)).await?;
        tracing::debug!("Loaded source config {:?}", config.source);
        Ok(config)
    }

    async fn fetch_observations(
        &self,
        source: &SourceSettings,
        request: &DataRequest,
    ) -> Result<Vec<Observation>, FetchError> {
        let observations: Vec<Observation> =
            self.get_json(&Self::data_url(source, request)).await?;
        tracing::debug!("Fetched {} observations", observations.len());
        Ok(observations)
    }
}
