//! Data transfer objects for web requests and responses.
//!
//! This is the boundary where the engine's semantic factor
//! identifiers get their presentation: each factor maps to a fixed
//! icon key here, and reason values are rendered to display strings.
//! Localized reason text stays with the frontend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{ConnectorType, Station, VehicleProfile};
use crate::recommend::{Factor, OptimizationMode, Reason, Recommendation};

/// Request body for `/api/recommendations`.
#[derive(Debug, Deserialize)]
pub struct RecommendRequestDto {
    /// User latitude in degrees
    pub user_lat: f64,

    /// User longitude in degrees
    pub user_lng: f64,

    /// Optimization mode
    pub mode: OptimizationMode,

    /// The user's vehicle
    pub vehicle: VehicleDto,

    /// How many recommendations to return (defaults to 3)
    pub count: Option<usize>,
}

/// Vehicle profile as sent by the client.
#[derive(Debug, Deserialize)]
pub struct VehicleDto {
    pub battery_capacity_kwh: f64,
    pub consumption_kwh_per_100km: f64,
    pub connector: ConnectorType,
    pub state_of_charge_pct: f64,
}

impl VehicleDto {
    /// Validate and convert into the domain profile.
    ///
    /// Rejects non-finite numbers and an out-of-range state of
    /// charge; the engine assumes well-formed input at its boundary.
    pub fn into_profile(self) -> Result<VehicleProfile, &'static str> {
        if !self.battery_capacity_kwh.is_finite() || self.battery_capacity_kwh <= 0.0 {
            return Err("battery_capacity_kwh must be a positive number");
        }
        if !self.consumption_kwh_per_100km.is_finite() || self.consumption_kwh_per_100km <= 0.0 {
            return Err("consumption_kwh_per_100km must be a positive number");
        }
        if !self.state_of_charge_pct.is_finite()
            || !(0.0..=100.0).contains(&self.state_of_charge_pct)
        {
            return Err("state_of_charge_pct must be in [0, 100]");
        }
        Ok(VehicleProfile {
            battery_capacity_kwh: self.battery_capacity_kwh,
            consumption_kwh_per_100km: self.consumption_kwh_per_100km,
            connector: self.connector,
            state_of_charge_pct: self.state_of_charge_pct,
        })
    }
}

/// A station in API responses.
#[derive(Debug, Serialize)]
pub struct StationResult {
    pub id: String,
    pub name: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    pub connectors: Vec<ConnectorType>,
    pub max_power_kw: f64,
    pub min_price_per_kwh: f64,
    pub available_chargers: u32,
    pub rating: Option<f64>,
}

impl StationResult {
    /// Create from a domain Station.
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id.as_str().to_string(),
            name: station.name.clone(),
            address: station.address.clone(),
            lat: station.location.lat(),
            lng: station.location.lng(),
            connectors: station.connectors.clone(),
            max_power_kw: station.max_power_kw,
            min_price_per_kwh: station.min_price_per_kwh,
            available_chargers: station.available_chargers,
            rating: station.rating,
        }
    }
}

/// A justification entry in a recommendation.
#[derive(Debug, Serialize)]
pub struct ReasonResult {
    /// Semantic factor identifier
    pub factor: Factor,

    /// Icon key for the frontend's icon set
    pub icon: &'static str,

    /// Formatted value, when the factor has a visible one
    pub value: Option<String>,
}

impl ReasonResult {
    /// Create from an engine reason.
    pub fn from_reason(reason: &Reason) -> Self {
        Self {
            factor: reason.factor,
            icon: factor_icon(reason.factor),
            value: reason.value.map(|v| v.to_string()),
        }
    }
}

/// Icon key for a factor, matching the frontend's icon set.
pub fn factor_icon(factor: Factor) -> &'static str {
    match factor {
        Factor::Proximity => "map-pin",
        Factor::Price => "coins",
        Factor::Power => "zap",
        Factor::Availability => "check-circle",
        Factor::Quality => "star",
    }
}

/// One ranked recommendation.
#[derive(Debug, Serialize)]
pub struct RecommendationResult {
    pub station: StationResult,

    /// Composite match score, 0 to 100
    pub match_percent: u8,

    /// Estimated minutes to arrive (approximate, not a routed ETA)
    pub travel_time_min: i64,

    /// Rough minutes to charge this vehicle to full at the station's
    /// best charger
    pub est_charge_min: Option<i64>,

    /// Why this station ranked where it did, strongest factor first
    pub reasons: Vec<ReasonResult>,
}

impl RecommendationResult {
    /// Create from an engine recommendation.
    pub fn from_recommendation(rec: &Recommendation, vehicle: &VehicleProfile) -> Self {
        Self {
            station: StationResult::from_station(&rec.station),
            match_percent: rec.match_percent,
            travel_time_min: rec.travel_time_min,
            est_charge_min: vehicle.charge_time_to_full_min(rec.station.max_power_kw),
            reasons: rec.reasons.iter().map(ReasonResult::from_reason).collect(),
        }
    }
}

/// Response for `/api/recommendations`.
#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub mode: OptimizationMode,
    pub recommendations: Vec<RecommendationResult>,
}

/// Response for `/api/stations`.
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    pub stations: Vec<StationResult>,

    /// When this snapshot was fetched from the directory
    pub fetched_at: DateTime<Utc>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommend::ReasonValue;

    #[test]
    fn factor_icons_are_fixed() {
        assert_eq!(factor_icon(Factor::Proximity), "map-pin");
        assert_eq!(factor_icon(Factor::Price), "coins");
        assert_eq!(factor_icon(Factor::Power), "zap");
        assert_eq!(factor_icon(Factor::Availability), "check-circle");
        assert_eq!(factor_icon(Factor::Quality), "star");
    }

    #[test]
    fn reason_result_formats_value() {
        let reason = Reason {
            factor: Factor::Power,
            value: Some(ReasonValue::Kilowatts(150.0)),
        };
        let result = ReasonResult::from_reason(&reason);
        assert_eq!(result.icon, "zap");
        assert_eq!(result.value.as_deref(), Some("150 kW"));
    }

    #[test]
    fn vehicle_dto_validation() {
        let valid = VehicleDto {
            battery_capacity_kwh: 75.0,
            consumption_kwh_per_100km: 18.0,
            connector: ConnectorType::Ccs2,
            state_of_charge_pct: 40.0,
        };
        assert!(valid.into_profile().is_ok());

        let nan_battery = VehicleDto {
            battery_capacity_kwh: f64::NAN,
            consumption_kwh_per_100km: 18.0,
            connector: ConnectorType::Ccs2,
            state_of_charge_pct: 40.0,
        };
        assert!(nan_battery.into_profile().is_err());

        let bad_soc = VehicleDto {
            battery_capacity_kwh: 75.0,
            consumption_kwh_per_100km: 18.0,
            connector: ConnectorType::Ccs2,
            state_of_charge_pct: 140.0,
        };
        assert!(bad_soc.into_profile().is_err());
    }

    #[test]
    fn mode_deserializes_snake_case() {
        let mode: OptimizationMode = serde_json::from_str("\"least_wait\"").unwrap();
        assert_eq!(mode, OptimizationMode::LeastWait);
    }
}
