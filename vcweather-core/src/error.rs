use chrono::NaiveDate;
use thiserror::Error;

use crate::temporal::Layout;

/// Errors surfaced by the response mapper and the record lookups.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Malformed weather response: {reason}")]
    MalformedResponse {
        reason: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    #[error("{record} record is missing required field '{field}'")]
    MissingRequiredField {
        record: &'static str,
        field: &'static str,
    },

    #[error("Field '{field}' holds '{value}', which is not a valid {layout} value")]
    InvalidTimestamp {
        field: &'static str,
        value: String,
        layout: Layout,
    },

    #[error("No daily record found for {date}")]
    RecordNotFound { date: NaiveDate },

    #[error("Daily record index {index} is out of range (held: {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

impl WeatherError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        WeatherError::MalformedResponse {
            reason: reason.into(),
            source: None,
        }
    }
}

/// Failures of the HTTP collaborator. These never reach the caller as `Err`;
/// the client turns them into a skipped fetch.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to {url} failed with status {status}: {body}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Request to {url} returned an empty body")]
    EmptyBody { url: String },
}

pub type Result<T, E = WeatherError> = std::result::Result<T, E>;
