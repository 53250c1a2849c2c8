//! Conversion from directory wire types to domain types.
//!
//! The backend data is untrusted: a single malformed record must not
//! poison the whole snapshot. Stations with invalid coordinates or
//! ids are dropped (with a warning), malformed chargers are dropped
//! per-charger, and out-of-range ratings are discarded.

use std::sync::Arc;

use tracing::warn;

use crate::domain::{
    Charger, ChargerStatus, ConnectorType, Coordinate, Station, StationId,
};

use super::types::{ChargerDto, StationDto};

/// Convert a batch of station DTOs, skipping invalid records.
pub fn convert_stations(dtos: Vec<StationDto>) -> Vec<Arc<Station>> {
    dtos.into_iter()
        .filter_map(convert_station)
        .map(Arc::new)
        .collect()
}

/// Convert one station DTO. Returns `None` when the record cannot be
/// represented in the domain at all (bad id or coordinates).
pub fn convert_station(dto: StationDto) -> Option<Station> {
    let id = match StationId::parse(&dto.id) {
        Ok(id) => id,
        Err(e) => {
            warn!(id = %dto.id, error = %e, "dropping station with invalid id");
            return None;
        }
    };

    let location = match Coordinate::new(dto.lat, dto.lng) {
        Ok(c) => c,
        Err(e) => {
            warn!(station = %id, error = %e, "dropping station with invalid coordinates");
            return None;
        }
    };

    let chargers: Vec<Charger> = dto
        .chargers
        .iter()
        .filter_map(convert_charger)
        .collect();

    let rating = dto
        .rating
        .filter(|r| r.is_finite() && (0.0..=5.0).contains(r));

    Some(Station::from_chargers(
        id,
        dto.name,
        dto.address,
        location,
        &chargers,
        rating,
    ))
}

/// Convert one charger DTO. Unknown connector or status strings, and
/// non-finite or negative numerics, drop the charger.
fn convert_charger(dto: &ChargerDto) -> Option<Charger> {
    let connector = match dto.connector_type.as_str() {
        "ccs2" => ConnectorType::Ccs2,
        "chademo" => ConnectorType::Chademo,
        "ac_type2" => ConnectorType::AcType2,
        other => {
            warn!(connector = other, "dropping charger with unknown connector type");
            return None;
        }
    };

    let status = match dto.status.as_str() {
        "available" => ChargerStatus::Available,
        "occupied" => ChargerStatus::Occupied,
        "maintenance" => ChargerStatus::Maintenance,
        other => {
            warn!(status = other, "dropping charger with unknown status");
            return None;
        }
    };

    if !dto.power_kw.is_finite() || dto.power_kw <= 0.0 {
        return None;
    }
    if !dto.price_per_kwh.is_finite() || dto.price_per_kwh < 0.0 {
        return None;
    }

    Some(Charger {
        connector,
        power_kw: dto.power_kw,
        price_per_kwh: dto.price_per_kwh,
        status,
    })
}
