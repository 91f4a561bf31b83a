// Period domain model - bucketing granularity and its rule table
//
// All calendar math happens on a zoned timestamp. Weeks follow ISO 8601
// (Monday start, week 1 holds the first Thursday), so day-of-week numbers
// Monday as 0 and Sunday as 6.
use chrono::{DateTime, Datelike, Timelike};
use chrono_tz::Tz;
use std::fmt;
use std::str::FromStr;

/// X-axis identity of a data point within one chart
pub type BucketKey = u32;

/// Identity of the line a data point belongs to
pub type SeriesKey = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    TenMinutes,
    Hour,
    Day,
    Week,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown period '{0}'")]
pub struct UnknownPeriod(pub String);

/// The four pure functions that place a timestamp on the chart.
pub struct PeriodRules {
    pub x_index: fn(&DateTime<Tz>) -> BucketKey,
    pub x_label: fn(&DateTime<Tz>) -> String,
    pub s_index: fn(&DateTime<Tz>) -> SeriesKey,
    pub s_label: fn(&DateTime<Tz>) -> String,
}

static TEN_MINUTE_RULES: PeriodRules = PeriodRules {
    x_index: ten_minute_bucket,
    x_label: |d| d.format("%M").to_string(),
    s_index: |d| d.format("%d/%m/%y %H").to_string(),
    s_label: |d| d.format("%H:00 %a %d/%m").to_string(),
};

static HOUR_RULES: PeriodRules = PeriodRules {
    x_index: |d| d.hour(),
    x_label: |d| d.format("%H:00").to_string(),
    s_index: |d| d.format("%d/%m/%y").to_string(),
    s_label: |d| d.format("%a %d/%m").to_string(),
};

static DAY_RULES: PeriodRules = PeriodRules {
    x_index: |d| d.weekday().num_days_from_monday(),
    x_label: |d| d.format("%a").to_string(),
    s_index: |d| {
        let week = d.iso_week();
        format!("{}-W{:02}", week.year(), week.week())
    },
    s_label: week_label,
};

static WEEK_RULES: PeriodRules = PeriodRules {
    x_index: |d| d.iso_week().week(),
    x_label: week_label,
    s_index: |d| d.iso_week().year().to_string(),
    s_label: |d| d.iso_week().year().to_string(),
};

/// Rounds up to the next 10-minute mark. Minute 0 stays 0 while 51..=59
/// land on 60, so an hour spans up to seven buckets.
fn ten_minute_bucket(d: &DateTime<Tz>) -> BucketKey {
    d.minute().div_ceil(10) * 10
}

fn week_label(d: &DateTime<Tz>) -> String {
    format!("week {}", d.iso_week().week())
}

impl Period {
    #[cfg(test)]
    pub const ALL: [Period; 4] = [Period::TenMinutes, Period::Hour, Period::Day, Period::Week];

    pub fn rules(self) -> &'static PeriodRules {
        match self {
            Period::TenMinutes => &TEN_MINUTE_RULES,
            Period::Hour => &HOUR_RULES,
            Period::Day => &DAY_RULES,
            Period::Week => &WEEK_RULES,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::TenMinutes => "10m",
            Period::Hour => "1h",
            Period::Day => "1d",
            Period::Week => "1w",
        }
    }
}

impl FromStr for Period {
    type Err = UnknownPeriod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "10m" => Ok(Period::TenMinutes),
            "1h" => Ok(Period::Hour),
            "1d" => Ok(Period::Day),
            "1w" => Ok(Period::Week),
            other => Err(UnknownPeriod(other.to_string())),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono_tz::{Asia::Tokyo, UTC};

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Tz> {
        UTC.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn test_parse_periods() {
        for period in Period::ALL {
            assert_eq!(period.as_str().parse::<Period>(), Ok(period));
            assert_eq!(period.to_string(), period.as_str());
        }
    }

    #[test]
    fn test_parse_unknown_period() {
        assert_eq!("5m".parse::<Period>(), Err(UnknownPeriod("5m".to_string())));
        assert_eq!("".parse::<Period>(), Err(UnknownPeriod(String::new())));
        assert!("1H".parse::<Period>().is_err());
    }

    #[test]
    fn test_ten_minute_buckets() {
        let rules = Period::TenMinutes.rules();
        let bucket = |min| (rules.x_index)(&at(2024, 1, 1, 5, min));

        assert_eq!(bucket(0), 0);
        assert_eq!(bucket(1), 10);
        assert_eq!(bucket(10), 10);
        assert_eq!(bucket(11), 20);
        assert_eq!(bucket(50), 50);
        assert_eq!(bucket(51), 60);
        assert_eq!(bucket(59), 60);
    }

    #[test]
    fn test_ten_minute_labels() {
        let rules = Period::TenMinutes.rules();
        let d = at(2024, 1, 1, 5, 7);

        assert_eq!((rules.x_label)(&d), "07");
        assert_eq!((rules.s_index)(&d), "01/01/24 05");
        assert_eq!((rules.s_label)(&d), "05:00 Mon 01/01");
    }

    #[test]
    fn test_hour_rules() {
        let rules = Period::Hour.rules();
        let d = at(2024, 1, 2, 17, 45);

        assert_eq!((rules.x_index)(&d), 17);
        assert_eq!((rules.x_label)(&d), "17:00");
        assert_eq!((rules.s_index)(&d), "02/01/24");
        assert_eq!((rules.s_label)(&d), "Tue 02/01");
    }

    #[test]
    fn test_day_rules_use_monday_start() {
        let rules = Period::Day.rules();
        let monday = at(2024, 1, 1, 12, 0);
        let sunday = at(2024, 1, 7, 12, 0);

        assert_eq!((rules.x_index)(&monday), 0);
        assert_eq!((rules.x_label)(&monday), "Mon");
        assert_eq!((rules.x_index)(&sunday), 6);
        assert_eq!((rules.x_label)(&sunday), "Sun");

        // Same ISO week, same line
        assert_eq!((rules.s_index)(&monday), "2024-W01");
        assert_eq!((rules.s_index)(&sunday), "2024-W01");
        assert_eq!((rules.s_label)(&sunday), "week 1");
    }

    #[test]
    fn test_week_rules_follow_iso_week_year() {
        let rules = Period::Week.rules();

        // Friday 1 Jan 2021 belongs to week 53 of 2020
        let d = at(2021, 1, 1, 0, 0);
        assert_eq!((rules.x_index)(&d), 53);
        assert_eq!((rules.x_label)(&d), "week 53");
        assert_eq!((rules.s_index)(&d), "2020");
        assert_eq!((rules.s_label)(&d), "2020");

        // Monday 30 Dec 2024 opens week 1 of 2025
        let d = at(2024, 12, 30, 0, 0);
        assert_eq!((rules.x_index)(&d), 1);
        assert_eq!((rules.s_label)(&d), "2025");
    }

    #[test]
    fn test_rules_use_zoned_time() {
        let rules = Period::Hour.rules();
        let utc = at(2024, 1, 1, 20, 0);
        let tokyo = utc.with_timezone(&Tokyo);

        assert_eq!((rules.x_index)(&tokyo), 5);
        assert_eq!((rules.s_index)(&tokyo), "02/01/24");
    }
}
