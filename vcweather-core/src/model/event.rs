use chrono::NaiveDateTime;
use serde::Serialize;

/// A discrete weather incident (hail, tornado, ...) reported during a day.
#[derive(Debug, Clone, Serialize)]
pub struct Event {
    pub datetime: NaiveDateTime,
    pub datetime_epoch: i64,
    /// Incident kind as the service names it, e.g. "hail".
    pub event_type: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Distance from the queried location.
    pub distance: f64,
    pub description: String,
    /// Magnitude of the incident; meaning depends on `event_type`.
    pub size: f64,
}
