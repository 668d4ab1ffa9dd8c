mod inmemory;
mod sqlite;

pub use inmemory::InMemoryJobRepo;
pub use sqlite::SqliteJobRepo;

use chrono::{DateTime, Utc};
use relance_domain::{Job, ID};

/// Durable store for pending jobs. Writes must survive a process restart;
/// the in-memory variant exists for tests only.
#[async_trait::async_trait]
pub trait IJobRepo: Send + Sync {
    /// Insert or overwrite. Last write wins.
    async fn insert(&self, job: &Job) -> anyhow::Result<()>;
    async fn find(&self, job_id: &ID) -> Option<Job>;
    /// Remove and return the job, or `None` when it was absent so the caller
    /// can report "not found".
    async fn delete(&self, job_id: &ID) -> Option<Job>;
    /// All pending jobs, in no guaranteed order.
    async fn find_all(&self) -> Vec<Job>;
    /// Jobs whose fire time is at or before `now`.
    async fn find_due(&self, now: DateTime<Utc>) -> Vec<Job>;
    /// Earliest pending fire time.
    async fn next_fire_at(&self) -> Option<DateTime<Utc>>;
}
