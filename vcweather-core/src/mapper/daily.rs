use serde_json::Value;

use super::fields::Fields;
use super::hourly::hourly_record;
use crate::error::Result;
use crate::model::{DailyRecord, Event};
use crate::temporal::{self, Layout};

pub(crate) fn daily_record(day: &Value) -> Result<DailyRecord> {
    let f = Fields::of("day", day)?;

    let datetime = f.timestamp("datetime", Layout::Date, temporal::parse_date)?;

    let events = f
        .array("events")
        .iter()
        .map(event)
        .collect::<Result<Vec<_>>>()?;

    let hours = f
        .array("hours")
        .iter()
        .map(hourly_record)
        .collect::<Result<Vec<_>>>()?;

    Ok(DailyRecord {
        datetime,
        datetime_epoch: f.integer("datetimeEpoch"),
        temp_max: f.number("tempmax"),
        temp_min: f.number("tempmin"),
        temp: f.number("temp"),
        feels_like_max: f.number("feelslikemax"),
        feels_like_min: f.number("feelslikemin"),
        feels_like: f.number("feelslike"),
        dew: f.number("dew"),
        humidity: f.number("humidity"),
        precip: f.number("precip"),
        precip_prob: f.number("precipprob"),
        precip_cover: f.number("precipcover"),
        precip_type: f.strings("preciptype"),
        snow: f.number("snow"),
        snow_depth: f.number("snowdepth"),
        wind_gust: f.number("windgust"),
        wind_speed: f.number("windspeed"),
        wind_dir: f.number("winddir"),
        pressure: f.number("pressure"),
        cloud_cover: f.number("cloudcover"),
        visibility: f.number("visibility"),
        solar_radiation: f.number("solarradiation"),
        solar_energy: f.number("solarenergy"),
        uv_index: f.number("uvindex"),
        severe_risk: f.number("severerisk"),
        sunrise: f.text("sunrise"),
        sunrise_epoch: f.integer("sunriseEpoch"),
        sunset: f.text("sunset"),
        sunset_epoch: f.integer("sunsetEpoch"),
        moon_phase: f.number("moonphase"),
        conditions: f.text("conditions"),
        description: f.text("description"),
        icon: f.text("icon"),
        stations: f.strings("stations"),
        source: f.text("source"),
        events,
        hours,
    })
}

fn event(value: &Value) -> Result<Event> {
    let f = Fields::of("event", value)?;

    Ok(Event {
        datetime: f.timestamp("datetime", Layout::DateTime, temporal::parse_date_time)?,
        datetime_epoch: f.integer("datetimeEpoch"),
        event_type: f.text("type"),
        latitude: f.number("latitude"),
        longitude: f.number("longitude"),
        distance: f.number("distance"),
        // The service names this field `desc` on events only.
        description: f.text("desc"),
        size: f.number("size"),
    })
}
