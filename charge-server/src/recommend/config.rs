//! Configuration for the recommendation engine.

/// Configuration parameters for station recommendation.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Maximum great-circle distance to consider a station at all (km).
    /// This bound only drops obviously irrelevant stations; it does
    /// not model routing feasibility.
    pub max_radius_km: f64,

    /// Assumed average urban travel speed (km/h) for the travel-time
    /// estimate.
    pub avg_speed_kmh: f64,

    /// Minimum usable charger power (kW). Stations whose best charger
    /// is below this are not worth an en-route stop.
    pub min_power_floor_kw: f64,

    /// Availability saturation cap: this many open chargers or more
    /// all score 1.0, so one giant site doesn't dominate the batch.
    pub availability_cap: u32,

    /// Neutral quality score assigned to unrated stations, so they
    /// are not unduly penalized.
    pub neutral_quality: f64,

    /// Maximum number of reasons attached to a recommendation.
    pub max_reasons: usize,
}

impl EngineConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        max_radius_km: f64,
        avg_speed_kmh: f64,
        min_power_floor_kw: f64,
        availability_cap: u32,
        neutral_quality: f64,
        max_reasons: usize,
    ) -> Self {
        Self {
            max_radius_km,
            avg_speed_kmh,
            min_power_floor_kw,
            availability_cap,
            neutral_quality,
            max_reasons,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_radius_km: 50.0,
            avg_speed_kmh: 30.0,
            min_power_floor_kw: 7.0,
            availability_cap: 4,
            neutral_quality: 0.6,
            max_reasons: 3,
        }
    }
}
