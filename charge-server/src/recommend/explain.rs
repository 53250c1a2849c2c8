//! Recommendation assembly: top-N selection and reason generation.
//!
//! Converts scored candidates into the engine's output form. Reasons
//! carry semantic factor identifiers and typed values only; mapping a
//! factor to an icon or a localized string is the caller's job, so no
//! presentation concern leaks into the engine.

use std::fmt;
use std::sync::Arc;

use crate::domain::Station;

use super::score::{Factor, ScoredCandidate, Weights};

/// A typed quantity backing a reason, formatted at display time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReasonValue {
    /// Estimated travel time.
    Minutes(i64),
    /// Charger power.
    Kilowatts(f64),
    /// Price per kWh.
    PricePerKwh(f64),
    /// Open charger count.
    AvailableChargers(u32),
    /// Station rating out of 5.
    Rating(f64),
}

impl fmt::Display for ReasonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReasonValue::Minutes(m) => write!(f, "{m} min"),
            ReasonValue::Kilowatts(kw) => write!(f, "{kw:.0} kW"),
            ReasonValue::PricePerKwh(p) => write!(f, "{p:.0}\u{111}/kWh"),
            ReasonValue::AvailableChargers(n) => write!(f, "{n} available"),
            ReasonValue::Rating(r) => write!(f, "{r:.1}/5"),
        }
    }
}

/// One justification for a recommendation's rank.
#[derive(Debug, Clone, PartialEq)]
pub struct Reason {
    /// Which factor justified the ranking.
    pub factor: Factor,

    /// The station attribute behind the factor, when one is visible
    /// (an unrated station's quality reason has no value).
    pub value: Option<ReasonValue>,
}

/// A ranked station with its score and justification.
#[derive(Debug, Clone)]
pub struct Recommendation {
    pub station: Arc<Station>,
    pub match_percent: u8,
    pub travel_time_min: i64,
    pub reasons: Vec<Reason>,
}

/// Truncate scored candidates (already sorted best-first) to the top
/// `count` and attach reasons.
///
/// `count == 0` yields an empty list; this is not an error.
pub fn select_top(
    scored: Vec<ScoredCandidate>,
    count: usize,
    weights: &Weights,
    max_reasons: usize,
) -> Vec<Recommendation> {
    scored
        .into_iter()
        .take(count)
        .map(|s| {
            let reasons = build_reasons(&s, weights, max_reasons);
            Recommendation {
                travel_time_min: s.candidate.travel_time_min,
                match_percent: s.match_percent,
                station: s.candidate.station,
                reasons,
            }
        })
        .collect()
}

/// Pick the factors with the highest weighted contribution
/// (weight x factor score) and render each as a reason.
///
/// Only positive contributions qualify, so the list is never empty
/// for a station with at least one positive factor, and it is capped
/// at `max_reasons` to stay legible.
fn build_reasons(scored: &ScoredCandidate, weights: &Weights, max_reasons: usize) -> Vec<Reason> {
    let mut contributions: Vec<(Factor, f64)> = Factor::ALL
        .iter()
        .map(|&factor| (factor, weights.get(factor) * scored.factors.get(factor)))
        .filter(|(_, c)| *c > 0.0)
        .collect();

    // Highest contribution first; canonical factor order on exact ties
    // keeps the output deterministic.
    contributions.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    contributions
        .into_iter()
        .take(max_reasons)
        .map(|(factor, _)| Reason {
            factor,
            value: reason_value(factor, scored),
        })
        .collect()
}

fn reason_value(factor: Factor, scored: &ScoredCandidate) -> Option<ReasonValue> {
    let station = &scored.candidate.station;
    match factor {
        Factor::Proximity => Some(ReasonValue::Minutes(scored.candidate.travel_time_min)),
        Factor::Price => Some(ReasonValue::PricePerKwh(station.min_price_per_kwh)),
        Factor::Power => Some(ReasonValue::Kilowatts(station.max_power_kw)),
        Factor::Availability => Some(ReasonValue::AvailableChargers(station.available_chargers)),
        Factor::Quality => station.rating.map(ReasonValue::Rating),
    }
}
