use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;
use uuid::Uuid;

/// Raised when a stored job-type column holds a value outside the known set.
#[derive(Debug, Error)]
#[error("unknown job type '{0}'")]
pub struct UnknownJobType(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobType {
    Remote,
    Onsite,
    Hybrid,
}

impl JobType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::Remote => "remote",
            JobType::Onsite => "onsite",
            JobType::Hybrid => "hybrid",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for JobType {
    type Error = UnknownJobType;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "remote" => Ok(JobType::Remote),
            "onsite" => Ok(JobType::Onsite),
            "hybrid" => Ok(JobType::Hybrid),
            _ => Err(UnknownJobType(value)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub skills: Vec<String>,
    #[sqlx(try_from = "String")]
    pub job_type: JobType,
    pub salary: String,
    pub created_at: DateTime<Utc>,
}

/// Validated fields for creating or replacing a job listing.
#[derive(Debug, Clone)]
pub struct JobInput {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub skills: Vec<String>,
    pub job_type: JobType,
    pub salary: String,
}
