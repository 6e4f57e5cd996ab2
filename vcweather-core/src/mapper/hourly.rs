use serde_json::Value;

use super::fields::Fields;
use crate::error::Result;
use crate::model::HourlyRecord;
use crate::temporal::{self, Layout};

pub(crate) fn hourly_record(hour: &Value) -> Result<HourlyRecord> {
    let f = Fields::of("hour", hour)?;

    Ok(HourlyRecord {
        datetime: f.timestamp("datetime", Layout::Time, temporal::parse_time)?,
        datetime_epoch: f.integer("datetimeEpoch"),
        temp: f.number("temp"),
        feels_like: f.number("feelslike"),
        humidity: f.number("humidity"),
        dew: f.number("dew"),
        precip: f.number("precip"),
        precip_prob: f.number("precipprob"),
        precip_type: f.strings("preciptype"),
        snow: f.number("snow"),
        snow_depth: f.number("snowdepth"),
        wind_gust: f.number("windgust"),
        wind_speed: f.number("windspeed"),
        wind_dir: f.number("winddir"),
        pressure: f.number("pressure"),
        visibility: f.number("visibility"),
        cloud_cover: f.number("cloudcover"),
        solar_radiation: f.number("solarradiation"),
        solar_energy: f.number("solarenergy"),
        uv_index: f.number("uvindex"),
        severe_risk: f.number("severerisk"),
        conditions: f.text("conditions"),
        icon: f.text("icon"),
        stations: f.strings("stations"),
        source: f.text("source"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WeatherError;
    use chrono::NaiveTime;
    use serde_json::json;

    #[test]
    fn maps_hour_fields() {
        let hour = json!({
            "datetime": "13:00:00",
            "datetimeEpoch": 1594386000,
            "temp": 29.1,
            "windgust": 41.4,
            "preciptype": ["rain"],
            "stations": ["KNYC"],
            "conditions": "Partially cloudy",
            "source": "obs"
        });

        let record = hourly_record(&hour).unwrap();

        assert_eq!(record.datetime, NaiveTime::from_hms_opt(13, 0, 0).unwrap());
        assert_eq!(record.datetime_epoch, 1_594_386_000);
        assert_eq!(record.temp, 29.1);
        assert_eq!(record.wind_gust, 41.4);
        assert_eq!(record.precip_type, vec!["rain"]);
        assert_eq!(record.stations, vec!["KNYC"]);
        assert_eq!(record.conditions, "Partially cloudy");
        assert_eq!(record.source, "obs");
        assert!(record.humidity.is_nan());
        assert!(record.severe_risk.is_nan());
        assert_eq!(record.icon, "");
    }

    #[test]
    fn misspelled_gust_key_is_ignored() {
        let hour = json!({ "datetime": "00:00:00", "widgust": 12.0 });

        let record = hourly_record(&hour).unwrap();
        assert!(record.wind_gust.is_nan());
    }

    #[test]
    fn hour_without_time_is_rejected() {
        let hour = json!({ "temp": 10.0 });

        let err = hourly_record(&hour).unwrap_err();
        assert!(matches!(
            err,
            WeatherError::MissingRequiredField { record: "hour", field: "datetime" }
        ));
    }

    #[test]
    fn hour_with_date_instead_of_time_is_rejected() {
        let hour = json!({ "datetime": "2020-07-10" });

        let err = hourly_record(&hour).unwrap_err();
        assert!(matches!(err, WeatherError::InvalidTimestamp { layout: Layout::Time, .. }));
    }
}
