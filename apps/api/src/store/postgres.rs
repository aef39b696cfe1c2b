use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::job::{Job, JobInput};
use crate::models::profile::{Profile, ProfileInput};
use crate::models::user::User;
use crate::store::{JobStore, ProfileStore, UserStore};

/// PostgreSQL-backed implementation of every store trait.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>("SELECT id, name, email, created_at FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
    }
}

#[async_trait]
impl ProfileStore for PgStore {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Profile>, sqlx::Error> {
        sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn upsert(&self, user_id: Uuid, input: ProfileInput) -> Result<Profile, sqlx::Error> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            INSERT INTO profiles
                (id, user_id, name, location, years_of_experience, skills, preferred_job_type)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (user_id) DO UPDATE SET
                name = EXCLUDED.name,
                location = EXCLUDED.location,
                years_of_experience = EXCLUDED.years_of_experience,
                skills = EXCLUDED.skills,
                preferred_job_type = EXCLUDED.preferred_job_type,
                updated_at = now()
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(&input.name)
        .bind(&input.location)
        .bind(input.years_of_experience)
        .bind(&input.skills)
        .bind(input.preferred_job_type.as_str())
        .fetch_one(&self.pool)
        .await?;

        info!("Saved profile {} for user {user_id}", profile.id);
        Ok(profile)
    }

    async fn delete_by_user(&self, user_id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM profiles WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

const INSERT_JOB: &str = r#"
    INSERT INTO jobs
        (id, title, company, location, description, skills, job_type, salary)
    VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
    RETURNING *
"#;

#[async_trait]
impl JobStore for PgStore {
    async fn find_all(&self) -> Result<Vec<Job>, sqlx::Error> {
        sqlx::query_as::<_, Job>("SELECT * FROM jobs ORDER BY created_at, id")
            .fetch_all(&self.pool)
            .await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Job>, sqlx::Error> {
        sqlx::query_as::<_, Job>("SELECT * FROM jobs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn create(&self, input: JobInput) -> Result<Job, sqlx::Error> {
        sqlx::query_as::<_, Job>(INSERT_JOB)
            .bind(Uuid::new_v4())
            .bind(&input.title)
            .bind(&input.company)
            .bind(&input.location)
            .bind(&input.description)
            .bind(&input.skills)
            .bind(input.job_type.as_str())
            .bind(&input.salary)
            .fetch_one(&self.pool)
            .await
    }

    async fn update(&self, id: Uuid, input: JobInput) -> Result<Option<Job>, sqlx::Error> {
        sqlx::query_as::<_, Job>(
            r#"
            UPDATE jobs SET
                title = $2, company = $3, location = $4, description = $5,
                skills = $6, job_type = $7, salary = $8
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.company)
        .bind(&input.location)
        .bind(&input.description)
        .bind(&input.skills)
        .bind(input.job_type.as_str())
        .bind(&input.salary)
        .fetch_optional(&self.pool)
        .await
    }

    async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn replace_all(&self, inputs: Vec<JobInput>) -> Result<Vec<Job>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let removed = sqlx::query("DELETE FROM jobs").execute(&mut *tx).await?;

        let mut jobs = Vec::with_capacity(inputs.len());
        for input in &inputs {
            let job = sqlx::query_as::<_, Job>(INSERT_JOB)
                .bind(Uuid::new_v4())
                .bind(&input.title)
                .bind(&input.company)
                .bind(&input.location)
                .bind(&input.description)
                .bind(&input.skills)
                .bind(input.job_type.as_str())
                .bind(&input.salary)
                .fetch_one(&mut *tx)
                .await?;
            jobs.push(job);
        }

        tx.commit().await?;

        info!(
            "Replaced job catalog: removed {}, inserted {}",
            removed.rows_affected(),
            jobs.len()
        );
        Ok(jobs)
    }
}
