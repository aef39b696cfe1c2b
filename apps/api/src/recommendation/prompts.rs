use serde::Serialize;
use uuid::Uuid;

use crate::models::job::{Job, JobType};
use crate::models::profile::Profile;

/// Catalog entry as shown to the model. Timestamps are left out.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PromptJob<'a> {
    id: Uuid,
    title: &'a str,
    company: &'a str,
    location: &'a str,
    description: &'a str,
    skills: &'a [String],
    job_type: JobType,
    salary: &'a str,
}

impl<'a> From<&'a Job> for PromptJob<'a> {
    fn from(job: &'a Job) -> Self {
        PromptJob {
            id: job.id,
            title: &job.title,
            company: &job.company,
            location: &job.location,
            description: &job.description,
            skills: &job.skills,
            job_type: job.job_type,
            salary: &job.salary,
        }
    }
}

/// Builds the top-3 matching prompt for one candidate against the whole catalog.
pub fn build_match_prompt(profile: &Profile, jobs: &[Job]) -> Result<String, serde_json::Error> {
    let catalog: Vec<PromptJob<'_>> = jobs.iter().map(PromptJob::from).collect();
    let jobs_json = serde_json::to_string_pretty(&catalog)?;

    Ok(format!(
        r#"You are an AI job matcher. Your task is to find the top 3 job matches for a candidate based on their profile and available job listings.

Candidate Profile:
- Name: {name}
- Location: {location}
- Years of Experience: {years}
- Skills: {skills}
- Preferred Job Type: {job_type}

Available Jobs:
{jobs_json}

Please analyze the candidate's profile and the available jobs, then return the top 3 job matches with the following format:
[
  {{
    "id": "job_id",
    "title": "job_title",
    "company": "company_name",
    "matchScore": 85,
    "matchReasons": ["reason1", "reason2", "reason3"]
  }},
  ...
]

The matchScore should be between 0-100 and represent how well the candidate matches the job requirements.
The matchReasons should include 2-3 specific reasons why this job is a good match for the candidate.
Use the exact "id" values from the job listings above."#,
        name = profile.name,
        location = profile.location,
        years = profile.years_of_experience,
        skills = profile.skills.join(", "),
        job_type = profile.preferred_job_type,
    ))
}
