// Error types for the fetch-then-render cycle
use crate::domain::period::UnknownPeriod;
use crate::domain::request::PeriodSelection;

/// Why one HTTP fetch (config or data) was rejected
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("expected a JSON response, got content type {content_type:?}")]
    NotJson { content_type: Option<String> },

    #[error("malformed JSON payload: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("failed to load configuration")]
    ConfigFetch(#[source] FetchError),

    #[error("failed to load data")]
    DataFetch(#[source] FetchError),

    #[error("no period selected")]
    MissingPeriod,

    #[error(transparent)]
    UnknownPeriod(#[from] UnknownPeriod),
}

impl GraphError {
    /// The single line shown in place of the chart
    pub fn user_message(&self) -> String {
        match self {
            GraphError::ConfigFetch(_) => "ERROR: Unable to load configuration!".to_string(),
            GraphError::DataFetch(_) => "ERROR: Unable to load data!".to_string(),
            GraphError::MissingPeriod => "ERROR: No period selected!".to_string(),
            GraphError::UnknownPeriod(UnknownPeriod(period)) => {
                format!("ERROR: Unknown period '{}'!", period)
            }
        }
    }
}

impl From<PeriodSelection> for GraphError {
    fn from(selection: PeriodSelection) -> Self {
        match selection {
            PeriodSelection::Missing => GraphError::MissingPeriod,
            PeriodSelection::Unknown(unknown) => GraphError::UnknownPeriod(unknown),
        }
    }
}
