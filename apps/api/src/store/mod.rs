//! Storage seams for users, profiles and jobs.
//!
//! Handlers and the recommendation engine only see these traits. `AppState`
//! carries them as `Arc<dyn ...>`; production wires in `PgStore`.

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::job::{Job, JobInput};
use crate::models::profile::{Profile, ProfileInput};
use crate::models::user::User;

#[cfg(test)]
pub mod memory;
pub mod postgres;

pub use postgres::PgStore;

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, sqlx::Error>;
}

/// At most one profile exists per user.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Profile>, sqlx::Error>;

    /// Creates the user's profile, or updates it in place if one exists.
    async fn upsert(&self, user_id: Uuid, input: ProfileInput) -> Result<Profile, sqlx::Error>;

    /// Returns whether a profile was removed.
    async fn delete_by_user(&self, user_id: Uuid) -> Result<bool, sqlx::Error>;
}

/// Job catalog. `find_all` returns jobs in insertion order.
#[async_trait]
pub trait JobStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Job>, sqlx::Error>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Job>, sqlx::Error>;

    async fn create(&self, input: JobInput) -> Result<Job, sqlx::Error>;

    async fn update(&self, id: Uuid, input: JobInput) -> Result<Option<Job>, sqlx::Error>;

    async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error>;

    /// Replaces the whole catalog atomically.
    async fn replace_all(&self, inputs: Vec<JobInput>) -> Result<Vec<Job>, sqlx::Error>;
}
