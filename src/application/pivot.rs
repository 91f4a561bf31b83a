// Bucketizer/pivot engine - flat observations to buckets x series
use crate::domain::chart::{AxisEntry, ChartData, ChartOptions, Dataset, SeriesEntry, SeriesOrder};
use crate::domain::observation::Observation;
use crate::domain::period::{BucketKey, Period, PeriodRules, SeriesKey};
use chrono::DateTime;
use chrono_tz::Tz;
use std::collections::{HashMap, HashSet};

/// Sparse bucket -> series -> value table plus the axis and series entries
/// in the order their keys were first seen.
#[derive(Debug, Default)]
struct PivotTable {
    cells: HashMap<BucketKey, HashMap<SeriesKey, f64>>,
    axis: Vec<AxisEntry>,
    series: Vec<SeriesEntry>,
    seen_series: HashSet<SeriesKey>,
}

impl PivotTable {
    fn insert(mut self, rules: &PeriodRules, at: &DateTime<Tz>, value: f64) -> Self {
        let bucket = (rules.x_index)(at);
        let series_key = (rules.s_index)(at);

        // Labels come from the first observation producing a key
        if !self.cells.contains_key(&bucket) {
            self.axis.push(AxisEntry {
                index: bucket,
                label: (rules.x_label)(at),
            });
        }
        if self.seen_series.insert(series_key.clone()) {
            self.series.push(SeriesEntry {
                index: series_key.clone(),
                label: (rules.s_label)(at),
            });
        }

        // Last write wins on a duplicate cell
        self.cells.entry(bucket).or_default().insert(series_key, value);
        self
    }

    fn into_chart(self, order: SeriesOrder, border_width: u32) -> ChartData {
        let PivotTable {
            cells,
            mut axis,
            mut series,
            ..
        } = self;

        axis.sort_by_key(|entry| entry.index);
        if order == SeriesOrder::ByKey {
            series.sort_by(|a, b| a.index.cmp(&b.index));
        }

        let datasets = series
            .into_iter()
            .map(|entry| Dataset {
                data: axis
                    .iter()
                    .map(|bucket| {
                        cells
                            .get(&bucket.index)
                            .and_then(|row| row.get(&entry.index))
                            .copied()
                    })
                    .collect(),
                label: entry.label,
                border_width,
            })
            .collect();

        ChartData {
            labels: axis.into_iter().map(|entry| entry.label).collect(),
            datasets,
        }
    }
}

/// Pivot observations into chart data for `period`.
///
/// Labels are sorted by bucket key whatever the input order. Series keep
/// first-seen order unless `options.series_order` asks for key order. Cells
/// with no observation are `None`.
pub fn pivot(observations: &[Observation], period: Period, options: &ChartOptions) -> ChartData {
    let rules = period.rules();

    observations
        .iter()
        .fold(PivotTable::default(), |table, observation| {
            let at = observation.timestamp.with_timezone(&options.timezone);
            table.insert(rules, &at, observation.value)
        })
        .into_chart(options.series_order, options.border_width)
}
