use std::sync::Arc;

use crate::recommendation::engine::RecommendationEngine;
use crate::store::{JobStore, ProfileStore, UserStore};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub profiles: Arc<dyn ProfileStore>,
    pub jobs: Arc<dyn JobStore>,
    /// Built once at startup around the configured completion provider.
    pub engine: RecommendationEngine,
    pub jwt_secret: String,
}
