//! Local match scorer: skill overlap plus job-type preference. No I/O.
//!
//! score = round(skill_overlap% × 0.7 + (job type accepted ? 30 : 0)), capped at 99.
//! 100 is left to the model tier; this heuristic never claims a perfect match.

use crate::models::job::Job;
use crate::models::profile::{PreferredJobType, Profile};
use crate::recommendation::{RankedMatch, TOP_MATCHES};

const SKILL_WEIGHT: f64 = 0.7;
const JOB_TYPE_BONUS: f64 = 30.0;
pub const MAX_HEURISTIC_SCORE: u8 = 99;

/// Scores every job against the profile and returns the best `TOP_MATCHES`,
/// highest first. Equal scores keep catalog order.
pub fn score_matches(profile: &Profile, jobs: &[Job]) -> Vec<RankedMatch> {
    let mut ranked: Vec<RankedMatch> = jobs.iter().map(|job| score_job(profile, job)).collect();
    ranked.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    ranked.truncate(TOP_MATCHES);
    ranked
}

fn score_job(profile: &Profile, job: &Job) -> RankedMatch {
    let matching = matching_skills(profile, job);
    let skill_score = skill_match_score(matching.len(), profile.skills.len());
    let job_type_match = profile.preferred_job_type.accepts(job.job_type);

    let raw = skill_score * SKILL_WEIGHT + if job_type_match { JOB_TYPE_BONUS } else { 0.0 };
    let match_score = (raw.round() as u8).min(MAX_HEURISTIC_SCORE);

    RankedMatch {
        job_id: job.id,
        match_score,
        match_reasons: vec![
            skill_reason(&matching),
            job_type_reason(profile.preferred_job_type, job),
            location_reason(profile, job),
        ],
    }
}

/// Job skills the profile also lists, in job order, exact and case-sensitive.
fn matching_skills<'a>(profile: &Profile, job: &'a Job) -> Vec<&'a str> {
    let mut matching: Vec<&str> = Vec::new();
    for skill in &job.skills {
        if profile.skills.contains(skill) && !matching.contains(&skill.as_str()) {
            matching.push(skill);
        }
    }
    matching
}

fn skill_match_score(matching: usize, profile_skills: usize) -> f64 {
    if profile_skills == 0 {
        return 0.0;
    }
    matching as f64 / profile_skills as f64 * 100.0
}

fn skill_reason(matching: &[&str]) -> String {
    if matching.is_empty() {
        "This role is a chance to build new skills beyond your current set".to_string()
    } else {
        format!(
            "Your skills in {} match this job's requirements",
            matching.join(", ")
        )
    }
}

fn job_type_reason(preference: PreferredJobType, job: &Job) -> String {
    match preference {
        PreferredJobType::Any => format!(
            "You are open to any job type, and this position is {}",
            job.job_type
        ),
        p if p.accepts(job.job_type) => {
            format!("This {} position matches your preferred job type", job.job_type)
        }
        p => format!(
            "This position is {}, while you prefer {p} work",
            job.job_type
        ),
    }
}

fn location_reason(profile: &Profile, job: &Job) -> String {
    if job.location.trim().eq_ignore_ascii_case(profile.location.trim()) {
        format!("The job is in {}, where you are based", job.location)
    } else {
        format!("The job is located in {}", job.location)
    }
}
