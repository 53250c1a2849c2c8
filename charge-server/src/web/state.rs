//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedDirectory;
use crate::recommend::Recommender;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Cached station directory
    pub directory: Arc<CachedDirectory>,

    /// Recommendation engine
    pub recommender: Arc<Recommender>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(directory: CachedDirectory, recommender: Recommender) -> Self {
        Self {
            directory: Arc::new(directory),
            recommender: Arc::new(recommender),
        }
    }
}
