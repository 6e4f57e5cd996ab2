use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use log::{debug, warn};

use crate::{
    Config,
    error::{Result, TransportError, WeatherError},
    mapper::parse_response,
    model::{DailyRecord, HourlyRecord, Station, WeatherResponse},
    query::{BASE_URL, Query, QueryOptions},
    transport::{HttpTransport, Transport, redact_key},
};

/// What a fetch did to the held result.
#[derive(Debug)]
pub enum FetchOutcome {
    /// The held result was replaced with the new response.
    Updated,
    /// Nothing was requested or the request failed; the held result is unchanged.
    Skipped(SkipReason),
}

impl FetchOutcome {
    pub fn is_updated(&self) -> bool {
        matches!(self, FetchOutcome::Updated)
    }
}

#[derive(Debug)]
pub enum SkipReason {
    NoApiKey,
    Transport(TransportError),
}

/// Client for the timeline API that keeps the last successful response.
///
/// Each fetch either replaces the held [`WeatherResponse`] as a whole or leaves
/// it untouched; a failed parse never exposes a half-built result.
#[derive(Debug)]
pub struct WeatherClient {
    api_key: String,
    base_url: String,
    transport: Box<dyn Transport>,
    response: Option<WeatherResponse>,
}

impl WeatherClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_transport(api_key, HttpTransport::new())
    }

    pub fn with_transport(api_key: impl Into<String>, transport: impl Transport + 'static) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
            transport: Box::new(transport),
            response: None,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_key().unwrap_or_default()).with_base_url(config.base_url())
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        self.api_key = api_key.into();
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issues `query` and, if a body comes back, replaces the held response with it.
    ///
    /// A missing API key or a transport failure yields [`FetchOutcome::Skipped`].
    /// A body that cannot be mapped is returned as an error. In both cases the
    /// previously held response stays in place.
    pub async fn fetch(&mut self, query: &Query) -> Result<FetchOutcome> {
        if self.api_key.trim().is_empty() {
            warn!(
                "No API key configured, skipping request for '{}'",
                query.location()
            );
            return Ok(FetchOutcome::Skipped(SkipReason::NoApiKey));
        }

        let url = query.url(&self.base_url, &self.api_key);
        debug!("Requesting {}", redact_key(&url));

        let body = match self.transport.fetch(&url).await {
            Ok(body) if body.trim().is_empty() => {
                let err = TransportError::EmptyBody {
                    url: redact_key(&url),
                };
                warn!("{err}");
                return Ok(FetchOutcome::Skipped(SkipReason::Transport(err)));
            }
            Ok(body) => body,
            Err(err) => {
                warn!("{err}");
                return Ok(FetchOutcome::Skipped(SkipReason::Transport(err)));
            }
        };

        let response = parse_response(&body).inspect_err(|err| {
            warn!("Discarding response for '{}': {err}", query.location());
        })?;

        self.response = Some(response);
        Ok(FetchOutcome::Updated)
    }

    /// Range query with explicit unit group, include and elements parameters.
    pub async fn fetch_weather_data_with_options(
        &mut self,
        location: &str,
        from: &str,
        to: &str,
        options: QueryOptions,
    ) -> Result<FetchOutcome> {
        self.fetch(&Query::RangeWithOptions {
            location: location.to_string(),
            from: from.to_string(),
            to: to.to_string(),
            options,
        })
        .await
    }

    pub async fn fetch_weather_data(
        &mut self,
        location: &str,
        from: &str,
        to: &str,
    ) -> Result<FetchOutcome> {
        self.fetch(&Query::Range {
            location: location.to_string(),
            from: from.to_string(),
            to: to.to_string(),
        })
        .await
    }

    pub async fn fetch_weather_on(&mut self, location: &str, datetime: &str) -> Result<FetchOutcome> {
        self.fetch(&Query::Date {
            location: location.to_string(),
            datetime: datetime.to_string(),
        })
        .await
    }

    pub async fn fetch_forecast(&mut self, location: &str) -> Result<FetchOutcome> {
        self.fetch(&Query::Forecast {
            location: location.to_string(),
        })
        .await
    }

    /// The last successfully fetched response, if any.
    pub fn response(&self) -> Option<&WeatherResponse> {
        self.response.as_ref()
    }

    pub fn days(&self) -> &[DailyRecord] {
        self.response
            .as_ref()
            .map(|r| r.days.as_slice())
            .unwrap_or_default()
    }

    pub fn station(&self, key: &str) -> Option<&Station> {
        self.response.as_ref()?.stations.get(key)
    }

    /// First held day whose date equals `date`.
    pub fn day_by_date(&self, date: NaiveDate) -> Result<&DailyRecord> {
        self.days()
            .iter()
            .find(|d| d.datetime == date)
            .ok_or(WeatherError::RecordNotFound { date })
    }

    pub fn day_by_index(&self, index: usize) -> Result<&DailyRecord> {
        let days = self.days();
        days.get(index).ok_or(WeatherError::IndexOutOfRange {
            index,
            len: days.len(),
        })
    }

    pub fn hour_at(&self, date: NaiveDate, time: NaiveTime) -> Option<&HourlyRecord> {
        self.day_by_date(date).ok()?.hour_at(time)
    }

    pub fn daily_dates(&self) -> Vec<NaiveDate> {
        self.days().iter().map(|d| d.datetime).collect()
    }

    pub fn hourly_datetimes(&self) -> Vec<NaiveDateTime> {
        self.response
            .as_ref()
            .map(WeatherResponse::hourly_datetimes)
            .unwrap_or_default()
    }

    /// Drops the held response.
    pub fn clear(&mut self) {
        self.response = None;
    }
}
