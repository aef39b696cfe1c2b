//! Job recommendations.
//!
//! Ranking degrades through three tiers: the model's JSON answer, job ids
//! scraped from the model's text, then the local skill-overlap scorer.

pub mod engine;
pub mod handlers;
pub mod parsing;
pub mod prompts;
pub mod scorer;

use serde::Serialize;
use uuid::Uuid;

use crate::models::job::Job;

/// Number of matches returned to the caller.
pub const TOP_MATCHES: usize = 3;

/// Which stage of the fallback chain produced a ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// JSON array parsed from the model response.
    Model,
    /// Job ids scraped from an unparseable model response.
    ScrapedIds,
    /// Local skill/job-type scorer.
    Scorer,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Model => "model",
            Tier::ScrapedIds => "scraped_ids",
            Tier::Scorer => "scorer",
        }
    }
}

/// A ranked job before its persisted details are attached.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedMatch {
    pub job_id: Uuid,
    pub match_score: u8,
    pub match_reasons: Vec<String>,
}

/// One recommendation as returned by `GET /api/recommendations`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub match_score: u8,
    pub match_reasons: Vec<String>,
    pub job_details: Job,
}
