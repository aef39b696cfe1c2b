/// System instruction sent with every completion request.
pub const JOB_MATCHER_SYSTEM: &str = "You are a job matching assistant that helps candidates \
    find the best job matches based on their profile and available job listings.";
