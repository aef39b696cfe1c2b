//! Axum route handlers for the Jobs API.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    extract::{Path, State},
    Json,
};
use bytes::Bytes;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::jobs::seed::sample_jobs;
use crate::models::job::{Job, JobInput, JobType};
use crate::models::SkillList;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRequest {
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub skills: SkillList,
    pub job_type: JobType,
    #[serde(default)]
    pub salary: String,
}

impl JobRequest {
    pub fn into_input(self) -> Result<JobInput, AppError> {
        let title = required("title", self.title)?;
        let company = required("company", self.company)?;
        let location = required("location", self.location)?;

        Ok(JobInput {
            title,
            company,
            location,
            description: self.description.trim().to_string(),
            skills: self.skills.into_skills(),
            job_type: self.job_type,
            salary: self.salary.trim().to_string(),
        })
    }
}

fn required(field: &str, value: String) -> Result<String, AppError> {
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(AppError::Validation(format!("{field} is required")));
    }
    Ok(value)
}

fn job_not_found() -> AppError {
    AppError::NotFound("Job not found".to_string())
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/jobs
pub async fn handle_list_jobs(State(state): State<AppState>) -> Result<Json<Vec<Job>>, AppError> {
    Ok(Json(state.jobs.find_all().await?))
}

/// GET /api/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Job>, AppError> {
    let Path(id) = path?;
    let job = state.jobs.find_by_id(id).await?.ok_or_else(job_not_found)?;
    Ok(Json(job))
}

/// POST /api/jobs
pub async fn handle_create_job(
    _auth: AuthUser,
    State(state): State<AppState>,
    payload: Result<Json<JobRequest>, JsonRejection>,
) -> Result<Json<Job>, AppError> {
    let Json(request) = payload?;
    let job = state.jobs.create(request.into_input()?).await?;
    tracing::info!("Created job {} ({})", job.id, job.title);
    Ok(Json(job))
}

/// PUT /api/jobs/:id
pub async fn handle_update_job(
    _auth: AuthUser,
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<JobRequest>, JsonRejection>,
) -> Result<Json<Job>, AppError> {
    let Path(id) = path?;
    let Json(request) = payload?;
    let job = state
        .jobs
        .update(id, request.into_input()?)
        .await?
        .ok_or_else(job_not_found)?;
    Ok(Json(job))
}

/// DELETE /api/jobs/:id
pub async fn handle_delete_job(
    _auth: AuthUser,
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Value>, AppError> {
    let Path(id) = path?;
    if !state.jobs.delete(id).await? {
        return Err(job_not_found());
    }
    Ok(Json(json!({ "msg": "Job removed" })))
}

/// POST /api/jobs/seed
///
/// Replaces the catalog with the posted array of jobs, or with the built-in
/// sample catalog when the body is empty. Intended for development.
pub async fn handle_seed_jobs(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Vec<Job>>, AppError> {
    let inputs = if body.iter().all(u8::is_ascii_whitespace) {
        sample_jobs()
    } else {
        let requests: Vec<JobRequest> = serde_json::from_slice(&body)
            .map_err(|e| AppError::Validation(format!("invalid job list: {e}")))?;
        requests
            .into_iter()
            .map(JobRequest::into_input)
            .collect::<Result<Vec<_>, _>>()?
    };

    let jobs = state.jobs.replace_all(inputs).await?;
    Ok(Json(jobs))
}
