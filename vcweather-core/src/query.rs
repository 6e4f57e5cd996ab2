/// Default endpoint of the Visual Crossing timeline API.
pub const BASE_URL: &str =
    "https://weather.visualcrossing.com/VisualCrossingWebServices/rest/services/timeline/";

/// Optional query parameters of a range request. Values are passed verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOptions {
    /// Unit system: "us", "metric", "uk" or "base".
    pub unit_group: String,
    /// Sections to include, e.g. "days,hours,events".
    pub include: String,
    /// Comma-separated element list to restrict the payload to.
    pub elements: String,
}

/// The request shapes the client can issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Range {
        location: String,
        from: String,
        to: String,
    },
    RangeWithOptions {
        location: String,
        from: String,
        to: String,
        options: QueryOptions,
    },
    /// A single day (or date-time) at a location.
    Date { location: String, datetime: String },
    /// The service's default forecast window, typically 15 days.
    Forecast { location: String },
}

impl Query {
    pub fn location(&self) -> &str {
        match self {
            Query::Range { location, .. }
            | Query::RangeWithOptions { location, .. }
            | Query::Date { location, .. }
            | Query::Forecast { location } => location,
        }
    }

    /// Full request URL against `base`, which is expected to end in `/`.
    pub fn url(&self, base: &str, api_key: &str) -> String {
        match self {
            Query::Range { location, from, to } => {
                format!("{base}{location}/{from}/{to}?key={api_key}")
            }
            Query::RangeWithOptions {
                location,
                from,
                to,
                options,
            } => format!(
                "{base}{location}/{from}/{to}?key={api_key}&include={}&elements={}&unitGroup={}",
                options.include, options.elements, options.unit_group,
            ),
            Query::Date { location, datetime } => {
                format!("{base}{location}/{datetime}?key={api_key}")
            }
            Query::Forecast { location } => format!("{base}{location}?key={api_key}"),
        }
    }
}
