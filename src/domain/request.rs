// Request context - where the chart was requested from and with which parameters
use super::period::{Period, UnknownPeriod};

#[derive(Debug, Clone, PartialEq)]
pub struct DataRequest {
    /// `Host` of the incoming request, port included
    pub host: String,
    pub path: String,
    pub query: Vec<(String, String)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodSelection {
    Missing,
    Unknown(UnknownPeriod),
}

impl DataRequest {
    pub fn new(host: impl Into<String>, path: impl Into<String>, query: Vec<(String, String)>) -> Self {
        Self {
            host: host.into(),
            path: path.into(),
            query,
        }
    }

    /// The `period` query parameter, first occurrence wins
    pub fn period(&self) -> Result<Period, PeriodSelection> {
        let raw = self
            .query
            .iter()
            .find(|(key, _)| key == "period")
            .map(|(_, value)| value.as_str())
            .ok_or(PeriodSelection::Missing)?;

        raw.parse().map_err(PeriodSelection::Unknown)
    }

    /// Host without its port. Bracketed IPv6 literals keep their brackets.
    pub fn hostname(&self) -> &str {
        let host = self.host.as_str();
        if host.starts_with('[') {
            return match host.find(']') {
                Some(end) => &host[..=end],
                None => host,
            };
        }
        match host.rsplit_once(':') {
            Some((name, _port)) => name,
            None => host,
        }
    }

    /// Query pairs re-encoded in their original order
    pub fn query_string(&self) -> String {
        self.query
            .iter()
            .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}
