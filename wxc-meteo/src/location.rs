use serde::Serialize;

/// A point the forecast is requested for.
#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
pub struct Location {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    /// IANA zone the hourly timestamps are reported in
    pub timezone: &'static str,
}

/// The only location the page charts.
pub const BUENOS_AIRES: Location = Location {
    name: "Buenos Aires",
    latitude: -34.61,
    longitude: -58.38,
    timezone: "America/Argentina/Buenos_Aires",
};
