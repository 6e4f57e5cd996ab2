//! Client library for the Visual Crossing timeline weather API.
//!
//! This crate defines:
//! - The typed model of a timeline response (days, hours, events, stations)
//! - The mapping from the service's loosely-typed JSON onto that model
//! - A client that builds request URLs, fetches through a pluggable transport
//!   and keeps the last successful response
//! - Configuration & credentials handling
//!
//! It is used by `vcweather-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod error;
pub mod mapper;
pub mod model;
pub mod query;
pub mod temporal;
pub mod transport;

pub use client::{FetchOutcome, SkipReason, WeatherClient};
pub use config::Config;
pub use error::{TransportError, WeatherError};
pub use model::{DailyRecord, Event, HourlyRecord, Station, WeatherResponse};
pub use query::{BASE_URL, Query, QueryOptions};
pub use transport::{HttpTransport, Transport};
