use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;
use std::collections::HashMap;

pub mod event;
pub mod station;

pub use event::Event;
pub use station::Station;

/// Result of one timeline query.
///
/// Optional measurements that the service omitted or sent as `null` are `NaN`,
/// never zero. Missing integers are `0`, missing strings are empty and missing
/// lists are empty.
#[derive(Debug, Clone, Serialize)]
pub struct WeatherResponse {
    /// Billing units the service charged for the request.
    pub query_cost: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub resolved_address: String,
    /// Location as it was requested.
    pub address: String,
    pub timezone: String,
    /// Offset from UTC, in hours.
    pub tz_offset: f64,
    pub days: Vec<DailyRecord>,
    /// Contributing stations keyed by the identifier the payload uses as object key.
    pub stations: HashMap<String, Station>,
}

impl WeatherResponse {
    pub fn day(&self, date: NaiveDate) -> Option<&DailyRecord> {
        self.days.iter().find(|d| d.datetime == date)
    }

    /// Every hour across all days, combined with its day's date, in source order.
    pub fn hourly_datetimes(&self) -> Vec<NaiveDateTime> {
        self.days
            .iter()
            .flat_map(|day| day.hours.iter().map(|h| day.datetime.and_time(h.datetime)))
            .collect()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DailyRecord {
    pub datetime: NaiveDate,
    pub datetime_epoch: i64,
    pub temp_max: f64,
    pub temp_min: f64,
    pub temp: f64,
    pub feels_like_max: f64,
    pub feels_like_min: f64,
    pub feels_like: f64,
    pub dew: f64,
    pub humidity: f64,
    pub precip: f64,
    pub precip_prob: f64,
    pub precip_cover: f64,
    pub precip_type: Vec<String>,
    pub snow: f64,
    pub snow_depth: f64,
    pub wind_gust: f64,
    pub wind_speed: f64,
    pub wind_dir: f64,
    pub pressure: f64,
    pub cloud_cover: f64,
    pub visibility: f64,
    pub solar_radiation: f64,
    pub solar_energy: f64,
    pub uv_index: f64,
    pub severe_risk: f64,
    pub sunrise: String,
    pub sunrise_epoch: i64,
    pub sunset: String,
    pub sunset_epoch: i64,
    pub moon_phase: f64,
    pub conditions: String,
    pub description: String,
    pub icon: String,
    pub stations: Vec<String>,
    pub source: String,
    pub events: Vec<Event>,
    /// At most 24 entries, in the order the service sent them.
    pub hours: Vec<HourlyRecord>,
}

impl DailyRecord {
    pub fn hour_at(&self, time: NaiveTime) -> Option<&HourlyRecord> {
        self.hours.iter().find(|h| h.datetime == time)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HourlyRecord {
    pub datetime: NaiveTime,
    pub datetime_epoch: i64,
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: f64,
    pub dew: f64,
    pub precip: f64,
    pub precip_prob: f64,
    pub precip_type: Vec<String>,
    pub snow: f64,
    pub snow_depth: f64,
    pub wind_gust: f64,
    pub wind_speed: f64,
    pub wind_dir: f64,
    pub pressure: f64,
    pub visibility: f64,
    pub cloud_cover: f64,
    pub solar_radiation: f64,
    pub solar_energy: f64,
    pub uv_index: f64,
    pub severe_risk: f64,
    pub conditions: String,
    pub icon: String,
    pub stations: Vec<String>,
    pub source: String,
}
