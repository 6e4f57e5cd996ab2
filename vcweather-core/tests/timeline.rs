use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use serde_json::json;
use vcweather_core::{
    FetchOutcome, Transport, TransportError, WeatherClient, WeatherError, WeatherResponse,
};

#[derive(Debug)]
struct Canned(String);

#[async_trait]
impl Transport for Canned {
    async fn fetch(&self, _url: &str) -> Result<String, TransportError> {
        Ok(self.0.clone())
    }
}

fn hours(temps: &[f64]) -> Vec<serde_json::Value> {
    temps
        .iter()
        .enumerate()
        .map(|(h, t)| {
            json!({
                "datetime": format!("{h:02}:00:00"),
                "datetimeEpoch": 1594353600 + 3600 * h as i64,
                "temp": t,
                "feelslike": t,
                "humidity": 60.0,
                "windgust": null,
                "preciptype": null,
                "stations": ["72505394728"],
                "source": "obs"
            })
        })
        .collect()
}

fn payload() -> serde_json::Value {
    let day_temps: Vec<f64> = (0..24).map(|h| 18.0 + f64::from(h) * 0.5).collect();

    json!({
        "queryCost": 2,
        "latitude": 40.7146,
        "longitude": -74.0071,
        "resolvedAddress": "New York, NY, United States",
        "address": "New York,NY",
        "timezone": "America/New_York",
        "tzoffset": -4.0,
        "days": [
            {
                "datetime": "2020-07-10",
                "datetimeEpoch": 1594353600,
                "tempmax": 30.5,
                "tempmin": 18.2,
                "humidity": null,
                "precip": 0.0,
                "preciptype": ["rain"],
                "windgust": 38.9,
                "sunrise": "05:36:48",
                "sunriseEpoch": 1594373808,
                "moonphase": 0.66,
                "conditions": "Rain, Partially cloudy",
                "icon": "rain",
                "stations": ["72505394728", "KLGA"],
                "source": "obs",
                "events": [{
                    "datetime": "2020-07-10T16:45:00",
                    "datetimeEpoch": 1594399500,
                    "type": "wind",
                    "desc": "Trees down",
                    "distance": 3.2
                }],
                "hours": hours(&day_temps)
            },
            {
                "datetime": "2020-07-11",
                "tempmax": 28.0,
                "hours": hours(&[20.0, 19.0])
            }
        ],
        "stations": {
            "72505394728": {
                "distance": 0.0, "latitude": 40.78, "longitude": -73.97, "useCount": 0,
                "id": "72505394728", "name": "NY CITY CENTRAL PARK, NY US",
                "quality": 50, "contribution": 0.0
            },
            "KLGA": {
                "distance": 9261.0, "latitude": 40.77, "longitude": -73.88, "useCount": 0,
                "id": "KLGA", "name": "KLGA", "quality": 50, "contribution": 0.0
            }
        }
    })
}

#[tokio::test]
async fn forecast_fetch_exposes_full_graph() {
    let mut client = WeatherClient::with_transport("KEY", Canned(payload().to_string()));

    let outcome = client.fetch_forecast("New York,NY").await.unwrap();
    assert!(matches!(outcome, FetchOutcome::Updated));

    let response = client.response().unwrap();
    assert_eq!(response.stations.len(), 2);
    assert_eq!(response.days.len(), 2);

    let day = client
        .day_by_date(NaiveDate::from_ymd_opt(2020, 7, 10).unwrap())
        .unwrap();
    assert_eq!(day.temp_max, 30.5);
    assert!(day.humidity.is_nan());
    assert_eq!(day.precip, 0.0);
    assert_eq!(day.wind_gust, 38.9);
    assert_eq!(day.sunrise, "05:36:48");
    assert_eq!(day.precip_type, ["rain"]);
    assert_eq!(day.events[0].description, "Trees down");
    assert_eq!(day.hours.len(), 24);
    assert!(
        day.hours
            .windows(2)
            .all(|w| w[0].datetime < w[1].datetime)
    );
    assert!(day.hours.iter().all(|h| h.wind_gust.is_nan()));

    let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
    let hour = client
        .hour_at(NaiveDate::from_ymd_opt(2020, 7, 10).unwrap(), noon)
        .unwrap();
    assert_eq!(hour.temp, 24.0);

    assert_eq!(client.hourly_datetimes().len(), 26);
}

#[tokio::test]
async fn missing_date_lookup_is_explicit() {
    let mut client = WeatherClient::with_transport("KEY", Canned(payload().to_string()));
    client.fetch_forecast("New York,NY").await.unwrap();

    let missing = NaiveDate::from_ymd_opt(1999, 1, 1).unwrap();
    let err = client.day_by_date(missing).unwrap_err();

    assert!(matches!(err, WeatherError::RecordNotFound { date } if date == missing));
    assert_eq!(err.to_string(), "No daily record found for 1999-01-01");
}

#[tokio::test]
async fn response_without_days_is_rejected() {
    let mut client = WeatherClient::with_transport("KEY", Canned(r#"{"queryCost":1}"#.into()));

    let err = client.fetch_forecast("Nowhere").await.unwrap_err();

    assert!(matches!(err, WeatherError::MalformedResponse { .. }));
    assert!(client.response().is_none());
}

#[test]
fn response_parses_without_a_client() {
    let response = WeatherResponse::from_json(&payload().to_string()).unwrap();

    assert_eq!(response.timezone, "America/New_York");
    assert_eq!(response.stations["KLGA"].distance, 9261.0);
}
