//! Domain types for the charging station finder.
//!
//! This module contains the core domain model types that represent
//! validated station data. Types with invariants (coordinates, ids)
//! enforce them at construction time, so code that receives these
//! types can trust their validity.

mod coord;
mod station;
mod vehicle;

pub use coord::{Coordinate, InvalidCoordinate};
pub use station::{
    Charger, ChargerStatus, ConnectorType, InvalidStationId, Station, StationId,
};
pub use vehicle::VehicleProfile;
