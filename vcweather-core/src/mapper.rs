//! Maps the timeline API's JSON payload onto the [`crate::model`] types.
//!
//! The payload is loosely structured: almost every field may be missing or
//! `null`. Mapping is all-or-nothing; a single bad day, event or hour fails
//! the whole response.

use log::debug;
use serde_json::Value;
use std::collections::HashMap;

use crate::error::{Result, WeatherError};
use crate::model::{Station, WeatherResponse};

mod daily;
mod fields;
mod hourly;

use fields::Fields;

/// Builds a [`WeatherResponse`] from a raw response body.
pub fn parse_response(body: &str) -> Result<WeatherResponse> {
    let root: Value =
        serde_json::from_str(body).map_err(|e| WeatherError::MalformedResponse {
            reason: "body is not valid JSON".to_string(),
            source: Some(e),
        })?;

    let f = Fields::of("response", &root)?;

    let days = root
        .get("days")
        .and_then(Value::as_array)
        .ok_or_else(|| WeatherError::malformed("'days' is missing or not an array"))?
        .iter()
        .map(daily::daily_record)
        .collect::<Result<Vec<_>>>()?;

    let stations = match root.get("stations").and_then(Value::as_object) {
        Some(entries) => entries
            .iter()
            .map(|(key, value)| station(value).map(|s| (key.clone(), s)))
            .collect::<Result<HashMap<_, _>>>()?,
        None => HashMap::new(),
    };

    let response = WeatherResponse {
        query_cost: f.integer("queryCost"),
        latitude: f.number("latitude"),
        longitude: f.number("longitude"),
        resolved_address: f.text("resolvedAddress"),
        address: f.text("address"),
        timezone: f.text("timezone"),
        tz_offset: f.get_or("tzoffset", 0.0),
        days,
        stations,
    };

    debug!(
        "Parsed weather response for '{}': {} day(s), {} station(s), cost {}",
        response.resolved_address,
        response.days.len(),
        response.stations.len(),
        response.query_cost,
    );

    Ok(response)
}

fn station(value: &Value) -> Result<Station> {
    let f = Fields::of("station", value)?;

    Ok(Station {
        id: f.text("id"),
        name: f.text("name"),
        distance: f.number("distance"),
        latitude: f.number("latitude"),
        longitude: f.number("longitude"),
        use_count: f.integer("useCount"),
        quality: f.integer("quality"),
        contribution: f.number("contribution"),
    })
}

impl WeatherResponse {
    /// Parses a timeline API response body. See [`parse_response`].
    pub fn from_json(body: &str) -> Result<Self> {
        parse_response(body)
    }
}
