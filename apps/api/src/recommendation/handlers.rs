//! Axum route handler for the Recommendations API.

use axum::{extract::State, Json};

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::recommendation::MatchResult;
use crate::state::AppState;

/// Names the fallback tier that produced the body.
pub const TIER_HEADER: &str = "x-recommendation-tier";

/// GET /api/recommendations
///
/// Returns up to three ranked matches for the caller, each with the current
/// persisted job record embedded.
pub async fn handle_get_recommendations(
    auth: AuthUser,
    State(state): State<AppState>,
) -> Result<([(&'static str, &'static str); 1], Json<Vec<MatchResult>>), AppError> {
    let recommendations = state.engine.recommend(auth.id()).await?;
    Ok((
        [(TIER_HEADER, recommendations.tier.as_str())],
        Json(recommendations.matches),
    ))
}
