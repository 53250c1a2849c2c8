//! Web layer for the charging station finder.
//!
//! Provides the JSON API consumed by the frontend: station snapshot
//! listing and station recommendations.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
