//! Charging station and charger types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Coordinate;

/// Error returned when parsing an invalid station id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

/// A validated station identifier.
///
/// Station ids come from the directory backend and are opaque, but a
/// valid id is always non-empty and contains no whitespace. This type
/// guarantees that by construction.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StationId(String);

impl StationId {
    /// Parse a station id from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        if s.is_empty() {
            return Err(InvalidStationId {
                reason: "must not be empty",
            });
        }
        if s.chars().any(char::is_whitespace) {
            return Err(InvalidStationId {
                reason: "must not contain whitespace",
            });
        }
        Ok(StationId(s.to_string()))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Charging connector classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectorType {
    /// CCS Combo 2 (DC fast charging)
    Ccs2,
    /// CHAdeMO (DC)
    Chademo,
    /// AC Type 2 (Mennekes)
    AcType2,
}

impl fmt::Display for ConnectorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ConnectorType::Ccs2 => "CCS2",
            ConnectorType::Chademo => "CHAdeMO",
            ConnectorType::AcType2 => "AC Type 2",
        };
        f.write_str(s)
    }
}

/// Operational status of a single charger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChargerStatus {
    Available,
    Occupied,
    Maintenance,
}

/// A single charge point at a station.
///
/// Chargers are not scored individually; the engine works with the
/// station-level aggregates derived from them. Per-charger connector
/// compatibility checks belong to the booking flow.
#[derive(Debug, Clone, PartialEq)]
pub struct Charger {
    pub connector: ConnectorType,
    pub power_kw: f64,
    pub price_per_kwh: f64,
    pub status: ChargerStatus,
}

/// A charging station snapshot.
///
/// Immutable input to the recommendation engine. The aggregate fields
/// (`max_power_kw`, `min_price_per_kwh`, `available_chargers`,
/// `connectors`) are derived from the station's chargers at
/// conversion time; the engine only reads them.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub id: StationId,
    pub name: String,
    pub address: String,
    pub location: Coordinate,

    /// Distinct connector classes on site. Empty means unknown.
    pub connectors: Vec<ConnectorType>,

    /// Highest charger power on site, in kW.
    pub max_power_kw: f64,

    /// Lowest price per kWh across chargers.
    pub min_price_per_kwh: f64,

    /// Number of chargers currently in `Available` status.
    pub available_chargers: u32,

    /// Aggregate user rating, 0 to 5. `None` when the station has no
    /// ratings yet.
    pub rating: Option<f64>,
}

impl Station {
    /// Build a station from its charger list, deriving the aggregates.
    pub fn from_chargers(
        id: StationId,
        name: impl Into<String>,
        address: impl Into<String>,
        location: Coordinate,
        chargers: &[Charger],
        rating: Option<f64>,
    ) -> Self {
        let max_power_kw = chargers.iter().map(|c| c.power_kw).fold(0.0, f64::max);

        let min_price_per_kwh = chargers
            .iter()
            .map(|c| c.price_per_kwh)
            .fold(f64::INFINITY, f64::min);
        let min_price_per_kwh = if min_price_per_kwh.is_finite() {
            min_price_per_kwh
        } else {
            0.0
        };

        let available_chargers = chargers
            .iter()
            .filter(|c| c.status == ChargerStatus::Available)
            .count() as u32;

        let mut connectors: Vec<ConnectorType> = Vec::new();
        for c in chargers {
            if !connectors.contains(&c.connector) {
                connectors.push(c.connector);
            }
        }

        Self {
            id,
            name: name.into(),
            address: address.into(),
            location,
            connectors,
            max_power_kw,
            min_price_per_kwh,
            available_chargers,
            rating,
        }
    }

    /// Whether the station offers the given connector class.
    ///
    /// Returns `true` when connector information is unknown (empty
    /// list): absence of data is not treated as incompatibility.
    pub fn supports_connector(&self, connector: ConnectorType) -> bool {
        self.connectors.is_empty() || self.connectors.contains(&connector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn charger(connector: ConnectorType, power: f64, price: f64, status: ChargerStatus) -> Charger {
        Charger {
            connector,
            power_kw: power,
            price_per_kwh: price,
            status,
        }
    }

    fn location() -> Coordinate {
        Coordinate::new(10.7769, 106.7009).unwrap()
    }

    #[test]
    fn station_id_parse() {
        assert!(StationId::parse("st-001").is_ok());
        assert!(StationId::parse("").is_err());
        assert!(StationId::parse("st 001").is_err());
        assert_eq!(StationId::parse("st-001").unwrap().as_str(), "st-001");
    }

    #[test]
    fn aggregates_from_chargers() {
        let chargers = vec![
            charger(ConnectorType::Ccs2, 150.0, 3500.0, ChargerStatus::Available),
            charger(ConnectorType::Ccs2, 60.0, 3200.0, ChargerStatus::Occupied),
            charger(
                ConnectorType::AcType2,
                11.0,
                2900.0,
                ChargerStatus::Available,
            ),
            charger(
                ConnectorType::Chademo,
                50.0,
                3400.0,
                ChargerStatus::Maintenance,
            ),
        ];

        let station = Station::from_chargers(
            StationId::parse("st-1").unwrap(),
            "Central",
            "1 Le Loi",
            location(),
            &chargers,
            Some(4.5),
        );

        assert_eq!(station.max_power_kw, 150.0);
        assert_eq!(station.min_price_per_kwh, 2900.0);
        assert_eq!(station.available_chargers, 2);
        assert_eq!(
            station.connectors,
            vec![
                ConnectorType::Ccs2,
                ConnectorType::AcType2,
                ConnectorType::Chademo
            ]
        );
        assert_eq!(station.rating, Some(4.5));
    }

    #[test]
    fn aggregates_from_no_chargers() {
        let station = Station::from_chargers(
            StationId::parse("st-2").unwrap(),
            "Empty",
            "nowhere",
            location(),
            &[],
            None,
        );

        assert_eq!(station.max_power_kw, 0.0);
        assert_eq!(station.min_price_per_kwh, 0.0);
        assert_eq!(station.available_chargers, 0);
        assert!(station.connectors.is_empty());
    }

    #[test]
    fn supports_connector() {
        let chargers = vec![charger(
            ConnectorType::Ccs2,
            150.0,
            3500.0,
            ChargerStatus::Available,
        )];
        let station = Station::from_chargers(
            StationId::parse("st-3").unwrap(),
            "DC only",
            "2 Le Loi",
            location(),
            &chargers,
            None,
        );

        assert!(station.supports_connector(ConnectorType::Ccs2));
        assert!(!station.supports_connector(ConnectorType::AcType2));
    }

    #[test]
    fn unknown_connectors_are_permissive() {
        let station = Station::from_chargers(
            StationId::parse("st-4").unwrap(),
            "Unknown",
            "3 Le Loi",
            location(),
            &[],
            None,
        );

        // No connector data: do not exclude on compatibility
        assert!(station.supports_connector(ConnectorType::Ccs2));
        assert!(station.supports_connector(ConnectorType::Chademo));
    }

    #[test]
    fn connector_display() {
        assert_eq!(ConnectorType::Ccs2.to_string(), "CCS2");
        assert_eq!(ConnectorType::Chademo.to_string(), "CHAdeMO");
        assert_eq!(ConnectorType::AcType2.to_string(), "AC Type 2");
    }
}
