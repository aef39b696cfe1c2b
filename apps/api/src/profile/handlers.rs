//! Axum route handlers for the Profile API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::profile::{PreferredJobType, Profile, ProfileInput};
use crate::models::SkillList;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRequest {
    pub name: String,
    pub location: String,
    pub years_of_experience: i64,
    pub skills: SkillList,
    #[serde(default)]
    pub preferred_job_type: PreferredJobType,
}

impl ProfileRequest {
    /// Trims text fields and checks the numeric range.
    pub fn into_input(self) -> Result<ProfileInput, AppError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::Validation("name is required".to_string()));
        }

        let location = self.location.trim().to_string();
        if location.is_empty() {
            return Err(AppError::Validation("location is required".to_string()));
        }

        let years_of_experience = i32::try_from(self.years_of_experience)
            .ok()
            .filter(|years| *years >= 0)
            .ok_or_else(|| {
                AppError::Validation("yearsOfExperience must be a non-negative integer".to_string())
            })?;

        Ok(ProfileInput {
            name,
            location,
            years_of_experience,
            skills: self.skills.into_skills(),
            preferred_job_type: self.preferred_job_type,
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/profile/me
pub async fn handle_get_profile(
    auth: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Profile>, AppError> {
    let profile = state
        .profiles
        .find_by_user(auth.id())
        .await?
        .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))?;

    Ok(Json(profile))
}

/// POST /api/profile
///
/// Creates the caller's profile, or updates it in place if one exists.
pub async fn handle_upsert_profile(
    auth: AuthUser,
    State(state): State<AppState>,
    payload: Result<Json<ProfileRequest>, JsonRejection>,
) -> Result<Json<Profile>, AppError> {
    let Json(request) = payload?;
    let input = request.into_input()?;

    let profile = state.profiles.upsert(auth.id(), input).await?;
    Ok(Json(profile))
}

/// DELETE /api/profile
pub async fn handle_delete_profile(
    auth: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Value>, AppError> {
    state.profiles.delete_by_user(auth.id()).await?;
    Ok(Json(json!({ "msg": "Profile deleted" })))
}
