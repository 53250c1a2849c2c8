//! Station recommendation engine.
//!
//! Answers: "given where I am, what I drive, and what I care about
//! right now, which charging stations should I go to?"
//!
//! The pipeline is a one-way data flow with no state between calls:
//! raw station list -> filtered candidates -> scored candidates ->
//! top-N explained recommendations.

mod config;
mod engine;
mod explain;
mod filter;
mod score;
mod travel;

pub use config::EngineConfig;
pub use engine::{RecommendRequest, Recommender};
pub use explain::{Reason, ReasonValue, Recommendation};
pub use filter::{Candidate, filter_candidates};
pub use score::{Factor, FactorScores, OptimizationMode, ScoredCandidate, Weights, score_candidates};
pub use travel::travel_time_min;
