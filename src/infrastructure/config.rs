use crate::domain::chart::{ChartOptions, SeriesOrder};
use anyhow::Context;
use chrono_tz::Tz;
use serde::Deserialize;
use std::net::SocketAddr;

const DEFAULT_CONFIG_FILE: &str = "config/graph";

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub frontend: FrontendSettings,
    pub chart: ChartSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FrontendSettings {
    /// Origin serving `config.json`; the request `Host` is used when unset
    #[serde(default)]
    pub origin: Option<String>,
    pub config_path: String,
    /// Local file served at `config_path`
    pub config_file: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChartSettings {
    pub timezone: String,
    pub sort_series: bool,
    pub border_width: u32,
}

impl ServerSettings {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        self.bind
            .parse()
            .with_context(|| format!("Invalid server.bind address '{}'", self.bind))
    }
}

impl ChartSettings {
    pub fn to_options(&self) -> anyhow::Result<ChartOptions> {
        let timezone: Tz = self
            .timezone
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid chart.timezone '{}': {}", self.timezone, e))?;

        let series_order = if self.sort_series {
            SeriesOrder::ByKey
        } else {
            SeriesOrder::FirstSeen
        };

        Ok(ChartOptions {
            timezone,
            series_order,
            border_width: self.border_width,
        })
    }
}

pub fn load_settings() -> anyhow::Result<Settings> {
    load_settings_from(DEFAULT_CONFIG_FILE)
}

/// Defaults, then the optional file at `path` (extension inferred), then
/// `GRAPH__SECTION__KEY` environment variables.
pub fn load_settings_from(path: &str) -> anyhow::Result<Settings> {
    let settings = config::Config::builder()
        .set_default("server.bind", "0.0.0.0:8080")?
        .set_default("frontend.config_path", "/config/config.json")?
        .set_default("frontend.config_file", "public/config/config.json")?
        .set_default("chart.timezone", "UTC")?
        .set_default("chart.sort_series", false)?
        .set_default("chart.border_width", 1)?
        .add_source(config::File::with_name(path).required(false))
        .add_source(config::Environment::with_prefix("GRAPH").separator("__"))
        .build()
        .with_context(|| format!("Failed to load settings from {}", path))?;

    Ok(settings.try_deserialize()?)
}
