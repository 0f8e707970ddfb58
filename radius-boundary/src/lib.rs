use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

/// A single record of a Nominatim `/search` response
/// (`format=json&addressdetails=1`).
///
/// Only the fields the web app needs are mapped.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NominatimPlace {
    pub place_id: Option<u64>,
    pub display_name: String,
    /// Latitude as decimal string.
    pub lat: String,
    /// Longitude as decimal string.
    pub lon: String,
    #[serde(default)]
    pub address: Option<NominatimAddress>,
}

#[derive(Default, Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NominatimAddress {
    pub city: Option<String>,
    pub town: Option<String>,
    pub village: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
pub struct PositionPolicy {
    pub enable_high_accuracy: bool,
    pub timeout_ms: u32,
    pub maximum_age_ms: u32,
}

/// Runtime settings of the web app as delivered by the server.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct ClientSettings {
    pub version: String,
    /// Base URL of the Nominatim compatible geocoding service.
    pub geocoding_url: String,
    pub position_policy: PositionPolicy,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Error {
    pub http_status: u16,
    pub message: String,
}
