//! Wire types for the station directory API.

use serde::{Deserialize, Serialize};

/// One page of the stations listing.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StationsPage {
    pub stations: Vec<StationDto>,

    /// Total station count across all pages.
    pub total: usize,
}

/// A station as returned by the directory backend.
///
/// Raw and untrusted: coordinates may be malformed, charger lists may
/// be empty, ratings may be out of range. The conversion layer
/// validates before anything reaches the domain.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StationDto {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub chargers: Vec<ChargerDto>,
    #[serde(default)]
    pub rating: Option<f64>,
}

/// A charge point as returned by the directory backend.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChargerDto {
    pub connector_type: String,
    pub power_kw: f64,
    pub price_per_kwh: f64,
    pub status: String,
}
