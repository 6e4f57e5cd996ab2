use serde::Serialize;

/// A weather station that contributed observations to a response.
#[derive(Debug, Clone, Serialize)]
pub struct Station {
    /// Identifier from the station's own payload; may differ from its map key.
    pub id: String,
    pub name: String,
    /// Distance from the queried location, in meters.
    pub distance: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub use_count: i64,
    pub quality: i64,
    /// Weight of this station in the blended measurements.
    pub contribution: f64,
}
