use crate::models::job::{JobInput, JobType};

fn job(
    title: &str,
    company: &str,
    location: &str,
    description: &str,
    skills: &[&str],
    job_type: JobType,
    salary: &str,
) -> JobInput {
    JobInput {
        title: title.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        description: description.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        job_type,
        salary: salary.to_string(),
    }
}

/// Sample catalog loaded by `POST /api/jobs/seed` when no body is sent.
pub fn sample_jobs() -> Vec<JobInput> {
    vec![
        job(
            "Frontend Developer",
            "Brightline Labs",
            "Bangalore",
            "Build responsive user interfaces for our analytics dashboard.",
            &["React", "JavaScript", "CSS", "HTML"],
            JobType::Remote,
            "₹8-12 LPA",
        ),
        job(
            "Backend Engineer",
            "Northwind Systems",
            "Pune",
            "Design and maintain REST APIs and data pipelines.",
            &["Node.js", "MongoDB", "Express", "REST"],
            JobType::Onsite,
            "₹10-15 LPA",
        ),
        job(
            "Full Stack Developer",
            "Cobalt Apps",
            "Hyderabad",
            "Own features end to end across a React and Node.js stack.",
            &["React", "Node.js", "MongoDB", "JavaScript"],
            JobType::Hybrid,
            "₹12-18 LPA",
        ),
        job(
            "Data Analyst",
            "Meridian Insights",
            "Mumbai",
            "Turn product data into reports and experiments.",
            &["Python", "SQL", "Excel", "Tableau"],
            JobType::Onsite,
            "₹6-9 LPA",
        ),
        job(
            "Machine Learning Engineer",
            "Quanta AI",
            "Bangalore",
            "Train and deploy recommendation models.",
            &["Python", "TensorFlow", "SQL", "Docker"],
            JobType::Remote,
            "₹18-25 LPA",
        ),
        job(
            "DevOps Engineer",
            "Skyforge Cloud",
            "Chennai",
            "Automate infrastructure and CI/CD pipelines.",
            &["AWS", "Docker", "Kubernetes", "Linux"],
            JobType::Remote,
            "₹14-20 LPA",
        ),
    ]
}
