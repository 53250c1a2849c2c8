//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tracing::error;

use crate::directory::DirectoryError;
use crate::domain::Coordinate;
use crate::recommend::RecommendRequest;

use super::dto::*;
use super::state::AppState;

/// Default number of recommendations when the client doesn't ask.
const DEFAULT_COUNT: usize = 3;

/// Upper bound on requested recommendations.
const MAX_COUNT: usize = 10;

/// Create the application router.
///
/// `static_dir` is the path to the frontend bundle.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/stations", get(list_stations))
        .route("/api/recommendations", post(recommend))
        .nest_service("/app", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Current station snapshot.
async fn list_stations(State(state): State<AppState>) -> Result<Json<StationsResponse>, AppError> {
    let snapshot = state.directory.snapshot().await?;

    let stations = snapshot
        .stations
        .iter()
        .map(|s| StationResult::from_station(s))
        .collect();

    Ok(Json(StationsResponse {
        stations,
        fetched_at: snapshot.fetched_at,
    }))
}

/// Rank stations for the user's location, vehicle, and mode.
async fn recommend(
    State(state): State<AppState>,
    Json(req): Json<RecommendRequestDto>,
) -> Result<Json<RecommendResponse>, AppError> {
    let user_location =
        Coordinate::new(req.user_lat, req.user_lng).map_err(|e| AppError::BadRequest {
            message: e.to_string(),
        })?;

    let vehicle = req
        .vehicle
        .into_profile()
        .map_err(|msg| AppError::BadRequest {
            message: msg.to_string(),
        })?;

    let count = req.count.unwrap_or(DEFAULT_COUNT).min(MAX_COUNT);

    let snapshot = state.directory.snapshot().await?;

    let request = RecommendRequest {
        user_location,
        vehicle: vehicle.clone(),
        mode: req.mode,
        stations: snapshot.stations.as_ref().clone(),
    };

    let recommendations = state
        .recommender
        .recommend(&request, count)
        .iter()
        .map(|rec| RecommendationResult::from_recommendation(rec, &vehicle))
        .collect();

    Ok(Json(RecommendResponse {
        mode: req.mode,
        recommendations,
    }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl From<DirectoryError> for AppError {
    fn from(e: DirectoryError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        error!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
