//! Candidate scoring and ranking.
//!
//! Assigns each filtered candidate a composite 0-100 score for the
//! chosen optimization mode, then orders candidates best-first.
//!
//! Factor scores are normalized against the current batch (the
//! nearest candidate scores 1.0 on proximity, the cheapest scores 1.0
//! on price, and so on). This keeps scores meaningful whatever the
//! local market's absolute prices and power figures are, but it also
//! means scores are NOT comparable across calls with different
//! candidate sets.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config::EngineConfig;
use super::filter::Candidate;

/// One independently scored dimension of station desirability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    Proximity,
    Price,
    Power,
    Availability,
    Quality,
}

impl Factor {
    /// All factors, in canonical order.
    pub const ALL: [Factor; 5] = [
        Factor::Proximity,
        Factor::Price,
        Factor::Power,
        Factor::Availability,
        Factor::Quality,
    ];
}

/// Named weighting profile selecting which factors matter most.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptimizationMode {
    Balanced,
    Fastest,
    Cheapest,
    LeastWait,
}

/// Per-factor weights for one mode. Each profile sums to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub proximity: f64,
    pub price: f64,
    pub power: f64,
    pub availability: f64,
    pub quality: f64,
}

impl Weights {
    /// Weight for a single factor.
    pub fn get(&self, factor: Factor) -> f64 {
        match factor {
            Factor::Proximity => self.proximity,
            Factor::Price => self.price,
            Factor::Power => self.power,
            Factor::Availability => self.availability,
            Factor::Quality => self.quality,
        }
    }

    fn sum(&self) -> f64 {
        self.proximity + self.price + self.power + self.availability + self.quality
    }
}

impl OptimizationMode {
    /// The weighting profile for this mode.
    pub fn weights(&self) -> Weights {
        match self {
            OptimizationMode::Balanced => Weights {
                proximity: 0.30,
                price: 0.20,
                power: 0.20,
                availability: 0.20,
                quality: 0.10,
            },
            OptimizationMode::Fastest => Weights {
                proximity: 0.20,
                price: 0.05,
                power: 0.50,
                availability: 0.15,
                quality: 0.10,
            },
            OptimizationMode::Cheapest => Weights {
                proximity: 0.15,
                price: 0.55,
                power: 0.10,
                availability: 0.15,
                quality: 0.05,
            },
            OptimizationMode::LeastWait => Weights {
                proximity: 0.15,
                price: 0.10,
                power: 0.15,
                availability: 0.55,
                quality: 0.05,
            },
        }
    }
}

/// Normalized per-factor scores, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorScores {
    pub proximity: f64,
    pub price: f64,
    pub power: f64,
    pub availability: f64,
    pub quality: f64,
}

impl FactorScores {
    /// Score for a single factor.
    pub fn get(&self, factor: Factor) -> f64 {
        match factor {
            Factor::Proximity => self.proximity,
            Factor::Price => self.price,
            Factor::Power => self.power,
            Factor::Availability => self.availability,
            Factor::Quality => self.quality,
        }
    }
}

/// A candidate with its factor scores and composite match percent.
#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    pub candidate: Candidate,
    pub factors: FactorScores,
    pub match_percent: u8,
}

/// Batch extremes used for self-relative normalization.
struct BatchStats {
    min_travel_time: i64,
    min_price: f64,
    max_power: f64,
    max_availability: u32,
}

impl BatchStats {
    fn compute(candidates: &[Candidate]) -> Self {
        let min_travel_time = candidates
            .iter()
            .map(|c| c.travel_time_min)
            .min()
            .unwrap_or(1);
        let min_price = candidates
            .iter()
            .map(|c| c.station.min_price_per_kwh)
            .fold(f64::INFINITY, f64::min);
        let max_power = candidates
            .iter()
            .map(|c| c.station.max_power_kw)
            .fold(0.0, f64::max);
        let max_availability = candidates
            .iter()
            .map(|c| c.station.available_chargers)
            .max()
            .unwrap_or(1);

        Self {
            min_travel_time,
            min_price,
            max_power,
            max_availability,
        }
    }
}

/// Score all candidates for the given mode and sort them best-first.
///
/// The returned order is deterministic: composite score descending,
/// ties broken by availability descending, then travel time
/// ascending, then station name.
pub fn score_candidates(
    candidates: Vec<Candidate>,
    mode: OptimizationMode,
    config: &EngineConfig,
) -> Vec<ScoredCandidate> {
    if candidates.is_empty() {
        return Vec::new();
    }

    let stats = BatchStats::compute(&candidates);
    let weights = mode.weights();

    let mut scored: Vec<ScoredCandidate> = candidates
        .into_iter()
        .map(|c| score_candidate(c, &weights, &stats, config))
        .collect();

    scored.sort_by(compare_scored);
    scored
}

fn score_candidate(
    candidate: Candidate,
    weights: &Weights,
    stats: &BatchStats,
    config: &EngineConfig,
) -> ScoredCandidate {
    let station = &candidate.station;

    // Proximity: inverse ratio so the nearest candidate in this batch
    // always scores 1.0. Travel time is floored at 1 minute upstream.
    let proximity = stats.min_travel_time as f64 / candidate.travel_time_min as f64;

    // Price: cheapest in the batch scores 1.0. The filter guarantees
    // positive finite prices.
    let price = stats.min_price / station.min_price_per_kwh;

    // Power: linear against the batch maximum.
    let power = if stats.max_power > 0.0 {
        station.max_power_kw / stats.max_power
    } else {
        0.0
    };

    // Availability: saturates at the cap so one outlier site with a
    // huge charger count doesn't dominate.
    let cap = config.availability_cap.max(1);
    let effective = station.available_chargers.min(cap);
    let denom = stats.max_availability.min(cap).max(1);
    let availability = effective as f64 / denom as f64;

    // Quality: rating mapped to [0, 1]; unrated stations get a
    // neutral score instead of zero.
    let quality = match station.rating {
        Some(r) => (r / 5.0).clamp(0.0, 1.0),
        None => config.neutral_quality,
    };

    let factors = FactorScores {
        proximity,
        price,
        power,
        availability,
        quality,
    };

    let composite = weights.proximity * proximity
        + weights.price * price
        + weights.power * power
        + weights.availability * availability
        + weights.quality * quality;
    let match_percent = (composite * 100.0).round().clamp(0.0, 100.0) as u8;

    debug!(
        station = %station.id,
        match_percent,
        proximity = format_args!("{proximity:.2}"),
        price = format_args!("{price:.2}"),
        power = format_args!("{power:.2}"),
        availability = format_args!("{availability:.2}"),
        quality = format_args!("{quality:.2}"),
        "scored candidate"
    );

    ScoredCandidate {
        candidate,
        factors,
        match_percent,
    }
}

/// Best-first comparison with the deterministic tie-break chain.
fn compare_scored(a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
    // Primary: composite score, higher first
    let score_cmp = b.match_percent.cmp(&a.match_percent);
    if score_cmp != Ordering::Equal {
        return score_cmp;
    }

    // Secondary: more available chargers first
    let avail_cmp = b
        .candidate
        .station
        .available_chargers
        .cmp(&a.candidate.station.available_chargers);
    if avail_cmp != Ordering::Equal {
        return avail_cmp;
    }

    // Tertiary: shorter travel time first
    let time_cmp = a.candidate.travel_time_min.cmp(&b.candidate.travel_time_min);
    if time_cmp != Ordering::Equal {
        return time_cmp;
    }

    // Final: lexical station name, for a reproducible order
    a.candidate.station.name.cmp(&b.candidate.station.name)
}
