use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::job::{JobType, UnknownJobType};

/// The kind of work a candidate is looking for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferredJobType {
    Remote,
    Onsite,
    #[default]
    Any,
}

impl PreferredJobType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PreferredJobType::Remote => "remote",
            PreferredJobType::Onsite => "onsite",
            PreferredJobType::Any => "any",
        }
    }

    /// True when a job of `job_type` satisfies this preference.
    pub fn accepts(&self, job_type: JobType) -> bool {
        match self {
            PreferredJobType::Any => true,
            PreferredJobType::Remote => job_type == JobType::Remote,
            PreferredJobType::Onsite => job_type == JobType::Onsite,
        }
    }
}

impl fmt::Display for PreferredJobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for PreferredJobType {
    type Error = UnknownJobType;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "remote" => Ok(PreferredJobType::Remote),
            "onsite" => Ok(PreferredJobType::Onsite),
            "any" => Ok(PreferredJobType::Any),
            _ => Err(UnknownJobType(value)),
        }
    }
}

/// One profile per user. `user` on the wire is the owning user's id.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: Uuid,
    #[serde(rename = "user")]
    pub user_id: Uuid,
    pub name: String,
    pub location: String,
    pub years_of_experience: i32,
    pub skills: Vec<String>,
    #[sqlx(try_from = "String")]
    pub preferred_job_type: PreferredJobType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated fields for creating or updating a profile.
#[derive(Debug, Clone)]
pub struct ProfileInput {
    pub name: String,
    pub location: String,
    pub years_of_experience: i32,
    pub skills: Vec<String>,
    pub preferred_job_type: PreferredJobType,
}
