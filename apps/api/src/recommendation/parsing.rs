//! Best-effort extraction of ranked matches from free-form model output.
//!
//! Tier 1 parses the first balanced JSON array. Tier 2 scrapes `"id": "..."`
//! pairs when the array is missing or malformed. Only ids naming a job in
//! the current catalog survive either tier.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

use crate::models::job::Job;
use crate::recommendation::{RankedMatch, TOP_MATCHES};

/// Synthetic score for the first scraped id; each later id scores 5 less.
const SCRAPED_TOP_SCORE: u8 = 95;
const SCRAPED_SCORE_STEP: u8 = 5;

/// Every match carries at least this many reasons.
const MIN_REASONS: usize = 2;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("no JSON array found in model response")]
    NoArray,

    #[error("model response array is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("model response names no known jobs")]
    NoKnownJobs,
}

/// One element of the array the prompt asks the model to produce.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ModelMatch {
    id: Value,
    #[serde(default)]
    match_score: f64,
    #[serde(default)]
    match_reasons: Vec<String>,
}

/// Returns the first balanced `[...]` slice of `text`. Brackets inside JSON
/// string literals do not count toward the depth.
pub fn extract_json_array(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }

    None
}

/// Tier 1: parses the model's JSON array into at most `TOP_MATCHES` ranked
/// jobs, keeping the model's order. Scores are clamped to 0..=100.
pub fn parse_model_matches(raw: &str, catalog: &[Job]) -> Result<Vec<RankedMatch>, ParseError> {
    let array = extract_json_array(raw).ok_or(ParseError::NoArray)?;
    let entries: Vec<ModelMatch> = serde_json::from_str(array)?;

    let known = known_ids(catalog);
    let mut seen = HashSet::new();
    let mut ranked = Vec::new();

    for entry in entries {
        let Some(job_id) = id_from_value(&entry.id) else {
            continue;
        };
        if !known.contains(&job_id) || !seen.insert(job_id) {
            continue;
        }

        ranked.push(RankedMatch {
            job_id,
            match_score: entry.match_score.round().clamp(0.0, 100.0) as u8,
            match_reasons: with_minimum_reasons(entry.match_reasons),
        });

        if ranked.len() == TOP_MATCHES {
            break;
        }
    }

    if ranked.is_empty() {
        return Err(ParseError::NoKnownJobs);
    }
    Ok(ranked)
}

/// Tier 2: collects the first `TOP_MATCHES` distinct known job ids that appear
/// as `"id": "<value>"` anywhere in the text. Scores descend 95, 90, 85.
pub fn scrape_ranked_matches(raw: &str, catalog: &[Job]) -> Vec<RankedMatch> {
    let known = known_ids(catalog);
    let mut seen = HashSet::new();

    id_pattern()
        .captures_iter(raw)
        .filter_map(|caps| Uuid::parse_str(caps[1].trim()).ok())
        .filter(|id| known.contains(id) && seen.insert(*id))
        .take(TOP_MATCHES)
        .enumerate()
        .map(|(rank, job_id)| RankedMatch {
            job_id,
            match_score: SCRAPED_TOP_SCORE - SCRAPED_SCORE_STEP * rank as u8,
            match_reasons: generic_reasons(),
        })
        .collect()
}

/// Reasons used when the model names a job without explaining why.
fn generic_reasons() -> Vec<String> {
    vec![
        "Selected by the AI job matcher for your profile".to_string(),
        "Review the job details to confirm the skills and job type fit".to_string(),
    ]
}

/// Keeps up to three non-blank model reasons, topping up with generic ones
/// when fewer than two remain.
fn with_minimum_reasons(mut reasons: Vec<String>) -> Vec<String> {
    reasons.retain(|reason| !reason.trim().is_empty());
    reasons.truncate(TOP_MATCHES);

    for generic in generic_reasons() {
        if reasons.len() >= MIN_REASONS {
            break;
        }
        if !reasons.contains(&generic) {
            reasons.push(generic);
        }
    }
    reasons
}

fn id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r#""id"\s*:\s*"([^"]+)""#).expect("id pattern is valid"))
}

fn known_ids(catalog: &[Job]) -> HashSet<Uuid> {
    catalog.iter().map(|job| job.id).collect()
}

fn id_from_value(value: &Value) -> Option<Uuid> {
    match value {
        Value::String(s) => Uuid::parse_str(s.trim()).ok(),
        _ => None,
    }
}
