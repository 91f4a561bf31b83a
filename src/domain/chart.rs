// Chart domain models - the chart-ready output of the pivot
use super::period::{BucketKey, SeriesKey};
use chrono_tz::Tz;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq)]
pub struct AxisEntry {
    pub index: BucketKey,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesEntry {
    pub index: SeriesKey,
    pub label: String,
}

/// One plotted line. `data[i]` belongs to the bucket of `labels[i]`;
/// `None` means no observation fell into that cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<Option<f64>>,
    pub border_width: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl ChartData {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty() && self.datasets.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeriesOrder {
    /// Lines appear in the order their first observation was seen
    #[default]
    FirstSeen,
    /// Lines are sorted by series key
    ByKey,
}

#[derive(Debug, Clone)]
pub struct ChartOptions {
    pub timezone: Tz,
    pub series_order: SeriesOrder,
    pub border_width: u32,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            timezone: Tz::UTC,
            series_order: SeriesOrder::FirstSeen,
            border_width: 1,
        }
    }
}
