//! Recommendation engine entry point.

use std::sync::Arc;

use crate::domain::{Coordinate, Station, VehicleProfile};

use super::config::EngineConfig;
use super::explain::{Recommendation, select_top};
use super::filter::filter_candidates;
use super::score::{OptimizationMode, score_candidates};

/// A recommendation request: one snapshot of stations plus the user's
/// situation.
#[derive(Debug, Clone)]
pub struct RecommendRequest {
    /// The user's current location.
    pub user_location: Coordinate,

    /// The user's vehicle.
    pub vehicle: VehicleProfile,

    /// Which weighting profile to rank with.
    pub mode: OptimizationMode,

    /// Station snapshot to rank. Owned and refreshed by the caller;
    /// the engine only reads it.
    pub stations: Vec<Arc<Station>>,
}

/// The station recommendation engine.
///
/// A pure, stateless scoring pipeline: filter, score, select,
/// explain. Every call is an independent computation over its
/// arguments with no I/O and no shared mutable state, so concurrent
/// calls are trivially safe, and identical inputs always produce
/// identical output.
#[derive(Debug, Clone, Default)]
pub struct Recommender {
    config: EngineConfig,
}

impl Recommender {
    /// Create an engine with the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// The engine's configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Produce the top `count` recommendations for the request.
    ///
    /// Returns at most `count` items, ordered best-first by
    /// `match_percent` with deterministic tie-breaking. An empty
    /// result (no viable station, or `count == 0`) is a normal
    /// outcome, never an error.
    pub fn recommend(&self, request: &RecommendRequest, count: usize) -> Vec<Recommendation> {
        if count == 0 || request.stations.is_empty() {
            return Vec::new();
        }

        let candidates = filter_candidates(
            &request.stations,
            &request.user_location,
            &request.vehicle,
            &self.config,
        );

        let scored = score_candidates(candidates, request.mode, &self.config);

        select_top(
            scored,
            count,
            &request.mode.weights(),
            self.config.max_reasons,
        )
    }
}
