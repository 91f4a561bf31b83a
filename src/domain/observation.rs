// Observation domain model - one timestamped scalar from the data source
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Observation {
    #[serde(rename = "_time")]
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "_value")]
    pub value: f64,
}

#[cfg(test)]
impl Observation {
    pub fn new(timestamp: DateTime<Utc>, value: f64) -> Self {
        Self { timestamp, value }
    }
}
