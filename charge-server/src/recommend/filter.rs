//! Candidate filtering.
//!
//! Removes stations that cannot serve the request at all, before the
//! scorer spends effort on unusable results. Pure function of its
//! inputs; an empty result is not an error, it means "no viable
//! station" and the caller handles the empty state.

use std::sync::Arc;

use tracing::debug;

use crate::domain::{Coordinate, Station, VehicleProfile};

use super::config::EngineConfig;
use super::travel::travel_time_min;

/// A station that survived filtering, with its precomputed distance
/// and travel-time estimate.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub station: Arc<Station>,
    pub distance_km: f64,
    pub travel_time_min: i64,
}

/// Filter stations down to viable candidates.
///
/// A station is excluded when:
/// - it has no available chargers,
/// - its best charger is below the usability power floor,
/// - it offers no connector matching the vehicle's preferred type
///   (only when connector information is present),
/// - it lies beyond the maximum radius from the user,
/// - its numeric aggregates are malformed (NaN, infinite, or a
///   non-positive price). A single corrupt record never aborts the
///   batch; it is simply dropped.
pub fn filter_candidates(
    stations: &[Arc<Station>],
    user_location: &Coordinate,
    vehicle: &VehicleProfile,
    config: &EngineConfig,
) -> Vec<Candidate> {
    let mut candidates = Vec::with_capacity(stations.len());

    for station in stations {
        if station.available_chargers == 0 {
            continue;
        }

        // Malformed aggregates: drop the record rather than let NaN
        // poison the batch.
        if !station.max_power_kw.is_finite() || !station.min_price_per_kwh.is_finite() {
            debug!(station = %station.id, "dropping station with non-finite aggregates");
            continue;
        }
        if station.min_price_per_kwh <= 0.0 {
            debug!(station = %station.id, "dropping station with non-positive price");
            continue;
        }

        if station.max_power_kw < config.min_power_floor_kw {
            continue;
        }

        if !station.supports_connector(vehicle.connector) {
            continue;
        }

        let distance_km = user_location.distance_km(&station.location);
        if distance_km > config.max_radius_km {
            continue;
        }

        candidates.push(Candidate {
            station: Arc::clone(station),
            distance_km,
            travel_time_min: travel_time_min(distance_km, config.avg_speed_kmh),
        });
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ConnectorType, StationId};

    fn station(id: &str, lat: f64, lng: f64) -> Station {
        Station {
            id: StationId::parse(id).unwrap(),
            name: id.to_string(),
            address: String::new(),
            location: Coordinate::new(lat, lng).unwrap(),
            connectors: vec![ConnectorType::Ccs2],
            max_power_kw: 120.0,
            min_price_per_kwh: 3500.0,
            available_chargers: 2,
            rating: None,
        }
    }

    fn vehicle() -> VehicleProfile {
        VehicleProfile {
            battery_capacity_kwh: 75.0,
            consumption_kwh_per_100km: 18.0,
            connector: ConnectorType::Ccs2,
            state_of_charge_pct: 50.0,
        }
    }

    fn user() -> Coordinate {
        Coordinate::new(10.7769, 106.7009).unwrap()
    }

    fn run(stations: Vec<Station>) -> Vec<Candidate> {
        let stations: Vec<Arc<Station>> = stations.into_iter().map(Arc::new).collect();
        filter_candidates(&stations, &user(), &vehicle(), &EngineConfig::default())
    }

    #[test]
    fn keeps_viable_station() {
        let result = run(vec![station("ok", 10.78, 106.70)]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].station.id.as_str(), "ok");
        assert!(result[0].travel_time_min >= 1);
    }

    #[test]
    fn excludes_no_available_chargers() {
        let mut s = station("busy", 10.78, 106.70);
        s.available_chargers = 0;
        assert!(run(vec![s]).is_empty());
    }

    #[test]
    fn excludes_below_power_floor() {
        let mut s = station("slow", 10.78, 106.70);
        s.max_power_kw = 3.3;
        assert!(run(vec![s]).is_empty());
    }

    #[test]
    fn excludes_connector_mismatch() {
        let mut s = station("chademo-only", 10.78, 106.70);
        s.connectors = vec![ConnectorType::Chademo];
        assert!(run(vec![s]).is_empty());
    }

    #[test]
    fn keeps_unknown_connectors() {
        let mut s = station("unknown", 10.78, 106.70);
        s.connectors = vec![];
        assert_eq!(run(vec![s]).len(), 1);
    }

    #[test]
    fn excludes_beyond_radius() {
        // Hanoi is over 1000 km from Ho Chi Minh City
        let s = station("hanoi", 21.0278, 105.8342);
        assert!(run(vec![s]).is_empty());
    }

    #[test]
    fn excludes_malformed_numerics() {
        let mut nan_power = station("nan-power", 10.78, 106.70);
        nan_power.max_power_kw = f64::NAN;

        let mut neg_price = station("neg-price", 10.78, 106.70);
        neg_price.min_price_per_kwh = -100.0;

        let mut inf_price = station("inf-price", 10.78, 106.70);
        inf_price.min_price_per_kwh = f64::INFINITY;

        assert!(run(vec![nan_power, neg_price, inf_price]).is_empty());
    }

    #[test]
    fn corrupt_record_does_not_poison_batch() {
        let mut bad = station("bad", 10.78, 106.70);
        bad.min_price_per_kwh = f64::NAN;
        let good = station("good", 10.78, 106.70);

        let result = run(vec![bad, good]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].station.id.as_str(), "good");
    }

    #[test]
    fn empty_input() {
        assert!(run(vec![]).is_empty());
    }
}
