//! Parsing of the timestamp strings the timeline API emits.
//!
//! The service uses three layouts: plain dates on days (`2020-07-10`), full
//! timestamps on events (`2020-07-10T14:30:00`) and bare times of day on hours
//! (`14:00:00`). Every parser returns `None` for input that does not match its
//! layout; callers decide whether that aborts the surrounding record.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Layout {
    /// `YYYY-M-D`, time of day zeroed.
    Date,
    /// `YYYY-M-DTHH:MM:SS`.
    DateTime,
    /// `HH:MM:SS`, date left at the Unix epoch.
    Time,
}

impl Layout {
    /// chrono format string for this layout.
    pub const fn pattern(&self) -> &'static str {
        match self {
            Layout::Date => "%Y-%m-%d",
            Layout::DateTime => "%Y-%m-%dT%H:%M:%S",
            Layout::Time => "%H:%M:%S",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Date => "date",
            Layout::DateTime => "date-time",
            Layout::Time => "time",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Zero value of the date part for time-only timestamps.
pub fn zero_date() -> NaiveDate {
    NaiveDate::default()
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), Layout::Date.pattern()).ok()
}

pub fn parse_date_time(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value.trim(), Layout::DateTime.pattern()).ok()
}

pub fn parse_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), Layout::Time.pattern()).ok()
}

/// Parses `value` with `layout` into a full timestamp, zeroing whatever part
/// the layout does not carry.
pub fn parse(layout: Layout, value: &str) -> Option<NaiveDateTime> {
    match layout {
        Layout::Date => parse_date(value).map(|d| d.and_time(NaiveTime::MIN)),
        Layout::DateTime => parse_date_time(value),
        Layout::Time => parse_time(value).map(|t| zero_date().and_time(t)),
    }
}

/// Renders `value` back into `layout`. Inverse of [`parse`] for zero-padded input.
pub fn format(layout: Layout, value: &NaiveDateTime) -> String {
    value.format(layout.pattern()).to_string()
}

/// Seconds since the Unix epoch, reading the naive timestamp as UTC.
pub fn epoch_seconds(value: &NaiveDateTime) -> i64 {
    value.and_utc().timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layouts_roundtrip_well_formed_input() {
        let cases = [
            (Layout::Date, "2020-07-10"),
            (Layout::DateTime, "2020-07-10T14:30:05"),
            (Layout::Time, "23:59:59"),
        ];

        for (layout, input) in cases {
            let parsed = parse(layout, input).expect("well-formed input should parse");
            assert_eq!(format(layout, &parsed), input, "layout {layout}");
        }
    }

    #[test]
    fn date_accepts_unpadded_month_and_day() {
        let date = parse_date("2021-3-7").expect("unpadded date should parse");
        assert_eq!(date, NaiveDate::from_ymd_opt(2021, 3, 7).unwrap());
    }

    #[test]
    fn date_layout_zeroes_time_of_day() {
        let ts = parse(Layout::Date, "2020-07-10").unwrap();
        assert_eq!(ts.time(), NaiveTime::MIN);
    }

    #[test]
    fn time_layout_keeps_zero_date() {
        let ts = parse(Layout::Time, "06:15:00").unwrap();
        assert_eq!(ts.date(), zero_date());
        assert_eq!(ts.time(), NaiveTime::from_hms_opt(6, 15, 0).unwrap());
    }

    #[test]
    fn mismatched_layout_is_rejected() {
        assert!(parse(Layout::Date, "14:00:00").is_none());
        assert!(parse(Layout::Time, "2020-07-10").is_none());
        assert!(parse(Layout::DateTime, "2020-07-10").is_none());
        assert!(parse(Layout::Date, "").is_none());
        assert!(parse(Layout::Date, "2020-13-40").is_none());
    }

    #[test]
    fn epoch_seconds_reads_naive_value_as_utc() {
        let ts = parse(Layout::DateTime, "1970-01-02T00:00:10").unwrap();
        assert_eq!(epoch_seconds(&ts), 86_410);
    }
}
