//! Recommendation engine: runs one recommendation request through the fallback tiers.
//!
//! Flow: load profile → load catalog → prompt the provider once →
//!       parse JSON array (tier 1) → scrape ids (tier 2) → local scorer (tier 3) →
//!       re-fetch each ranked job → return.
//!
//! Provider and parsing failures never reach the caller; they demote the
//! request to the next tier. No retries, no caching.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::{CompletionProvider, LlmError};
use crate::models::job::Job;
use crate::models::profile::Profile;
use crate::recommendation::parsing::{parse_model_matches, scrape_ranked_matches};
use crate::recommendation::prompts::build_match_prompt;
use crate::recommendation::scorer::score_matches;
use crate::recommendation::{MatchResult, RankedMatch, Tier};
use crate::store::{JobStore, ProfileStore};

/// Why the model tiers produced nothing usable.
#[derive(Debug, Error)]
enum ModelRankingError {
    #[error("prompt serialization failed: {0}")]
    Prompt(#[from] serde_json::Error),

    #[error("provider call failed: {0}")]
    Provider(#[from] LlmError),

    #[error("model response contained no usable job ids")]
    NoSignal,
}

/// Ranked matches plus the tier that produced them.
#[derive(Debug)]
pub struct Recommendations {
    pub tier: Tier,
    pub matches: Vec<MatchResult>,
}

#[derive(Clone)]
pub struct RecommendationEngine {
    profiles: Arc<dyn ProfileStore>,
    jobs: Arc<dyn JobStore>,
    provider: Arc<dyn CompletionProvider>,
}

impl RecommendationEngine {
    pub fn new(
        profiles: Arc<dyn ProfileStore>,
        jobs: Arc<dyn JobStore>,
        provider: Arc<dyn CompletionProvider>,
    ) -> Self {
        Self {
            profiles,
            jobs,
            provider,
        }
    }

    /// Produces up to three ranked matches for `user_id`.
    ///
    /// Fails with `NotFound` when the user has no profile or the catalog is
    /// empty, and with `Recommendation` only when the local scorer cannot run.
    pub async fn recommend(&self, user_id: Uuid) -> Result<Recommendations, AppError> {
        let profile = self
            .profiles
            .find_by_user(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))?;

        let catalog = self.jobs.find_all().await?;
        if catalog.is_empty() {
            return Err(AppError::NotFound("No jobs available".to_string()));
        }

        let (tier, ranked) = match self.rank_with_model(&profile, &catalog).await {
            Ok(result) => result,
            Err(e) => {
                warn!(
                    "Model ranking via {} failed for user {user_id}: {e}; using local scorer",
                    self.provider.name()
                );
                (Tier::Scorer, self.rank_locally(&profile).await?)
            }
        };

        let matches = self.attach_job_details(ranked).await?;
        info!(
            "Recommended {} jobs for user {user_id} (tier: {})",
            matches.len(),
            tier.as_str()
        );

        Ok(Recommendations { tier, matches })
    }

    /// Tiers 1 and 2: a single provider call, then parse or scrape its text.
    async fn rank_with_model(
        &self,
        profile: &Profile,
        catalog: &[Job],
    ) -> Result<(Tier, Vec<RankedMatch>), ModelRankingError> {
        let prompt = build_match_prompt(profile, catalog)?;
        let raw = self.provider.complete(&prompt).await?;

        match parse_model_matches(&raw, catalog) {
            Ok(ranked) => return Ok((Tier::Model, ranked)),
            Err(e) => warn!("Could not parse model recommendations: {e}; scraping job ids"),
        }

        let ranked = scrape_ranked_matches(&raw, catalog);
        if ranked.is_empty() {
            return Err(ModelRankingError::NoSignal);
        }
        Ok((Tier::ScrapedIds, ranked))
    }

    /// Tier 3: the local scorer against freshly loaded jobs.
    async fn rank_locally(&self, profile: &Profile) -> Result<Vec<RankedMatch>, AppError> {
        let jobs = self
            .jobs
            .find_all()
            .await
            .map_err(|e| AppError::Recommendation(format!("failed to load jobs: {e}")))?;

        if jobs.is_empty() {
            return Err(AppError::Recommendation(
                "no jobs available for scoring".to_string(),
            ));
        }

        Ok(score_matches(profile, &jobs))
    }

    /// Embeds the current persisted record for each ranked job. Jobs deleted
    /// since ranking are dropped.
    async fn attach_job_details(
        &self,
        ranked: Vec<RankedMatch>,
    ) -> Result<Vec<MatchResult>, AppError> {
        let mut matches = Vec::with_capacity(ranked.len());

        for entry in ranked {
            let Some(job) = self.jobs.find_by_id(entry.job_id).await? else {
                warn!("Job {} vanished before its details were loaded", entry.job_id);
                continue;
            };

            matches.push(MatchResult {
                id: job.id,
                title: job.title.clone(),
                company: job.company.clone(),
                match_score: entry.match_score,
                match_reasons: entry.match_reasons,
                job_details: job,
            });
        }

        Ok(matches)
    }
}
