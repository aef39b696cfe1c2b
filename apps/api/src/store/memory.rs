//! In-memory store used by unit and router tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::models::job::{Job, JobInput};
use crate::models::profile::{Profile, ProfileInput};
use crate::models::user::User;
use crate::store::{JobStore, ProfileStore, UserStore};

#[derive(Default)]
pub struct MemoryStore {
    users: Mutex<Vec<User>>,
    profiles: Mutex<Vec<Profile>>,
    jobs: Mutex<Vec<Job>>,
    calls: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of trait calls made against this store.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn add_user(&self, name: &str) -> User {
        let user = User {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            created_at: Utc::now(),
        };
        self.users.lock().unwrap().push(user.clone());
        user
    }

    pub fn add_job(&self, input: JobInput) -> Job {
        let job = build_job(input, self.jobs.lock().unwrap().len());
        self.jobs.lock().unwrap().push(job.clone());
        job
    }

    pub fn clear_jobs(&self) {
        self.jobs.lock().unwrap().clear();
    }

    fn touch(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

fn build_job(input: JobInput, position: usize) -> Job {
    Job {
        id: Uuid::new_v4(),
        title: input.title,
        company: input.company,
        location: input.location,
        description: input.description,
        skills: input.skills,
        job_type: input.job_type,
        salary: input.salary,
        created_at: Utc::now() + Duration::microseconds(position as i64),
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, sqlx::Error> {
        self.touch();
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == user_id)
            .cloned())
    }
}

#[async_trait]
impl ProfileStore for MemoryStore {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Profile>, sqlx::Error> {
        self.touch();
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.user_id == user_id)
            .cloned())
    }

    async fn upsert(&self, user_id: Uuid, input: ProfileInput) -> Result<Profile, sqlx::Error> {
        self.touch();
        let mut profiles = self.profiles.lock().unwrap();
        let now = Utc::now();

        if let Some(existing) = profiles.iter_mut().find(|p| p.user_id == user_id) {
            existing.name = input.name;
            existing.location = input.location;
            existing.years_of_experience = input.years_of_experience;
            existing.skills = input.skills;
            existing.preferred_job_type = input.preferred_job_type;
            existing.updated_at = now;
            return Ok(existing.clone());
        }

        let profile = Profile {
            id: Uuid::new_v4(),
            user_id,
            name: input.name,
            location: input.location,
            years_of_experience: input.years_of_experience,
            skills: input.skills,
            preferred_job_type: input.preferred_job_type,
            created_at: now,
            updated_at: now,
        };
        profiles.push(profile.clone());
        Ok(profile)
    }

    async fn delete_by_user(&self, user_id: Uuid) -> Result<bool, sqlx::Error> {
        self.touch();
        let mut profiles = self.profiles.lock().unwrap();
        let before = profiles.len();
        profiles.retain(|p| p.user_id != user_id);
        Ok(profiles.len() < before)
    }
}

#[async_trait]
impl JobStore for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Job>, sqlx::Error> {
        self.touch();
        Ok(self.jobs.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Job>, sqlx::Error> {
        self.touch();
        Ok(self
            .jobs
            .lock()
            .unwrap()
            .iter()
            .find(|j| j.id == id)
            .cloned())
    }

    async fn create(&self, input: JobInput) -> Result<Job, sqlx::Error> {
        self.touch();
        Ok(self.add_job(input))
    }

    async fn update(&self, id: Uuid, input: JobInput) -> Result<Option<Job>, sqlx::Error> {
        self.touch();
        let mut jobs = self.jobs.lock().unwrap();
        let Some(job) = jobs.iter_mut().find(|j| j.id == id) else {
            return Ok(None);
        };
        job.title = input.title;
        job.company = input.company;
        job.location = input.location;
        job.description = input.description;
        job.skills = input.skills;
        job.job_type = input.job_type;
        job.salary = input.salary;
        Ok(Some(job.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        self.touch();
        let mut jobs = self.jobs.lock().unwrap();
        let before = jobs.len();
        jobs.retain(|j| j.id != id);
        Ok(jobs.len() < before)
    }

    async fn replace_all(&self, inputs: Vec<JobInput>) -> Result<Vec<Job>, sqlx::Error> {
        self.touch();
        let replaced: Vec<Job> = inputs
            .into_iter()
            .enumerate()
            .map(|(position, input)| build_job(input, position))
            .collect();
        *self.jobs.lock().unwrap() = replaced.clone();
        Ok(replaced)
    }
}
