// Data source domain models - the fetched front-end configuration document
use serde::Deserialize;
use std::fmt;

/// `config.json` as served next to the front-end. Only `source` is read.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RemoteConfig {
    pub source: SourceSettings,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SourceSettings {
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub port: Option<SourcePort>,
}

/// Ports show up both as numbers and as strings in deployed configs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawPort")]
pub enum SourcePort {
    Number(u64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPort {
    Integer(u64),
    Float(f64),
    Text(String),
}

impl TryFrom<RawPort> for SourcePort {
    type Error = String;

    fn try_from(raw: RawPort) -> Result<Self, Self::Error> {
        match raw {
            RawPort::Integer(n) => Ok(SourcePort::Number(n)),
            // JSON writers may emit 8086.0 for an integral port
            RawPort::Float(f) if f >= 0.0 && f.fract() == 0.0 && f <= u16::MAX as f64 => {
                Ok(SourcePort::Number(f as u64))
            }
            RawPort::Float(f) => Err(format!("invalid port {}", f)),
            RawPort::Text(s) => Ok(SourcePort::Text(s)),
        }
    }
}

impl SourcePort {
    fn is_set(&self) -> bool {
        match self {
            SourcePort::Number(n) => *n != 0,
            SourcePort::Text(s) => !s.trim().is_empty(),
        }
    }
}

impl fmt::Display for SourcePort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourcePort::Number(n) => write!(f, "{}", n),
            SourcePort::Text(s) => f.write_str(s.trim()),
        }
    }
}

impl SourceSettings {
    /// Base URL of the data source. An empty or missing host falls back to
    /// `fallback_hostname`; a zero or empty port is left out.
    pub fn base_url(&self, fallback_hostname: &str) -> String {
        let host = self
            .host
            .as_deref()
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .unwrap_or(fallback_hostname)
            .trim_end_matches('/');

        let mut url = if host.starts_with("http://") || host.starts_with("https://") {
            host.to_string()
        } else {
            format!("http://{}", host)
        };

        if let Some(port) = self.port.as_ref().filter(|p| p.is_set()) {
            url.push(':');
            url.push_str(&port.to_string());
        }

        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(host: Option<&str>, port: Option<SourcePort>) -> SourceSettings {
        SourceSettings {
            host: host.map(str::to_string),
            port,
        }
    }

    #[test]
    fn test_deserialize_port_variants() {
        let config: RemoteConfig =
            serde_json::from_str(r#"{"source": {"host": "influx.local", "port": 8086}}"#).unwrap();
        assert_eq!(config.source.port, Some(SourcePort::Number(8086)));

        let config: RemoteConfig =
            serde_json::from_str(r#"{"source": {"port": "8086"}, "title": "ignored"}"#).unwrap();
        assert_eq!(config.source.host, None);
        assert_eq!(config.source.port, Some(SourcePort::Text("8086".to_string())));
    }

    #[test]
    fn test_deserialize_integral_float_port() {
        let config: RemoteConfig =
            serde_json::from_str(r#"{"source": {"host": "influx.local", "port": 8086.0}}"#).unwrap();
        assert_eq!(config.source.port, Some(SourcePort::Number(8086)));
        assert_eq!(config.source.base_url("ignored"), "http://influx.local:8086");

        assert!(serde_json::from_str::<RemoteConfig>(r#"{"source": {"port": 8086.5}}"#).is_err());
        assert!(serde_json::from_str::<RemoteConfig>(r#"{"source": {"port": -1.0}}"#).is_err());
    }

    #[test]
    fn test_deserialize_requires_source() {
        assert!(serde_json::from_str::<RemoteConfig>(r#"{"title": "graph"}"#).is_err());
    }

    #[test]
    fn test_base_url() {
        let s = settings(Some("influx.local"), Some(SourcePort::Number(8086)));
        assert_eq!(s.base_url("ignored"), "http://influx.local:8086");

        let s = settings(Some("influx.local"), Some(SourcePort::Text("9000".to_string())));
        assert_eq!(s.base_url("ignored"), "http://influx.local:9000");

        let s = settings(None, Some(SourcePort::Number(5000)));
        assert_eq!(s.base_url("graph.local"), "http://graph.local:5000");

        let s = settings(Some("https://data.example.com/"), None);
        assert_eq!(s.base_url("graph.local"), "https://data.example.com");
    }

    #[test]
    fn test_base_url_treats_blank_values_as_absent() {
        let s = settings(Some(""), Some(SourcePort::Number(0)));
        assert_eq!(s.base_url("graph.local"), "http://graph.local");

        let s = settings(Some("  "), Some(SourcePort::Text(String::new())));
        assert_eq!(s.base_url("[::1]"), "http://[::1]");
    }
}
