//! Geographic coordinate type.

use std::fmt;

/// Mean Earth radius in kilometers, used for great-circle distance.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Error returned when constructing an invalid coordinate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid coordinate: {reason}")]
pub struct InvalidCoordinate {
    reason: &'static str,
}

/// A validated geographic coordinate (WGS84 degrees).
///
/// Latitude is in [-90, 90], longitude in [-180, 180], and both are
/// finite. This type guarantees that any `Coordinate` value is valid
/// by construction, so downstream code never has to re-check for NaN
/// or out-of-range values.
///
/// # Examples
///
/// ```
/// use charge_server::domain::Coordinate;
///
/// let hcmc = Coordinate::new(10.7769, 106.7009).unwrap();
/// assert_eq!(hcmc.lat(), 10.7769);
///
/// // NaN is rejected
/// assert!(Coordinate::new(f64::NAN, 106.7).is_err());
///
/// // Out of range is rejected
/// assert!(Coordinate::new(91.0, 0.0).is_err());
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct Coordinate {
    lat: f64,
    lng: f64,
}

impl Coordinate {
    /// Construct a coordinate from latitude and longitude in degrees.
    pub fn new(lat: f64, lng: f64) -> Result<Self, InvalidCoordinate> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(InvalidCoordinate {
                reason: "latitude and longitude must be finite",
            });
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(InvalidCoordinate {
                reason: "latitude must be in [-90, 90]",
            });
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(InvalidCoordinate {
                reason: "longitude must be in [-180, 180]",
            });
        }
        Ok(Self { lat, lng })
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Great-circle distance to another coordinate in kilometers,
    /// computed with the haversine formula.
    ///
    /// This is straight-line distance over the sphere, not a routed
    /// driving distance.
    pub fn distance_km(&self, other: &Coordinate) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let dlat = (other.lat - self.lat).to_radians();
        let dlng = (other.lng - self.lng).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().asin();

        EARTH_RADIUS_KM * c
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordinate({}, {})", self.lat, self.lng)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_valid() {
        assert!(Coordinate::new(0.0, 0.0).is_ok());
        assert!(Coordinate::new(10.7769, 106.7009).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
        assert!(Coordinate::new(90.0, 180.0).is_ok());
    }

    #[test]
    fn reject_non_finite() {
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
        assert!(Coordinate::new(0.0, f64::NAN).is_err());
        assert!(Coordinate::new(f64::INFINITY, 0.0).is_err());
        assert!(Coordinate::new(0.0, f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn reject_out_of_range() {
        assert!(Coordinate::new(90.001, 0.0).is_err());
        assert!(Coordinate::new(-90.001, 0.0).is_err());
        assert!(Coordinate::new(0.0, 180.001).is_err());
        assert!(Coordinate::new(0.0, -180.001).is_err());
    }

    #[test]
    fn distance_to_self_is_zero() {
        let p = Coordinate::new(10.7769, 106.7009).unwrap();
        assert_eq!(p.distance_km(&p), 0.0);
    }

    #[test]
    fn distance_one_degree_longitude_at_equator() {
        let a = Coordinate::new(0.0, 0.0).unwrap();
        let b = Coordinate::new(0.0, 1.0).unwrap();
        let d = a.distance_km(&b);
        // One degree of longitude at the equator is ~111.2 km
        assert!((d - 111.19).abs() < 0.5, "got {d}");
    }

    #[test]
    fn distance_known_pair() {
        // District 1 to Thu Duc, Ho Chi Minh City: roughly 10 km
        let d1 = Coordinate::new(10.7769, 106.7009).unwrap();
        let thu_duc = Coordinate::new(10.8494, 106.7537).unwrap();
        let d = d1.distance_km(&thu_duc);
        assert!((9.0..11.0).contains(&d), "got {d}");
    }

    #[test]
    fn display() {
        let p = Coordinate::new(10.7769, 106.7009).unwrap();
        assert_eq!(format!("{}", p), "(10.7769, 106.7009)");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn valid_coordinate() -> impl Strategy<Value = Coordinate> {
        (-90.0f64..=90.0, -180.0f64..=180.0)
            .prop_map(|(lat, lng)| Coordinate::new(lat, lng).unwrap())
    }

    proptest! {
        /// Any in-range pair constructs successfully
        #[test]
        fn in_range_always_valid(lat in -90.0f64..=90.0, lng in -180.0f64..=180.0) {
            prop_assert!(Coordinate::new(lat, lng).is_ok());
        }

        /// Distance is symmetric
        #[test]
        fn distance_symmetric(a in valid_coordinate(), b in valid_coordinate()) {
            let ab = a.distance_km(&b);
            let ba = b.distance_km(&a);
            prop_assert!((ab - ba).abs() < 1e-9);
        }

        /// Distance is non-negative and bounded by half the Earth's circumference
        #[test]
        fn distance_bounded(a in valid_coordinate(), b in valid_coordinate()) {
            let d = a.distance_km(&b);
            prop_assert!(d >= 0.0);
            prop_assert!(d <= 20_040.0, "got {}", d);
        }
    }
}
