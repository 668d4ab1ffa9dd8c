use super::IJobRepo;
use chrono::{DateTime, TimeZone, Utc};
use relance_domain::{Job, ID};
use sqlx::{FromRow, SqlitePool};
use tracing::error;

pub struct SqliteJobRepo {
    pool: SqlitePool,
}

impl SqliteJobRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct JobRaw {
    job_id: String,
    fire_at: i64,
    payload: String,
}

impl JobRaw {
    fn to_domain(self) -> anyhow::Result<Job> {
        let id = self.job_id.parse::<ID>()?;
        let fire_at = Utc
            .timestamp_millis_opt(self.fire_at)
            .single()
            .ok_or_else(|| anyhow::anyhow!("invalid fire_at timestamp: {}", self.fire_at))?;
        let payload = serde_json::from_str(&self.payload)?;
        Ok(Job {
            id,
            fire_at,
            payload,
        })
    }
}

fn decode_row(row: JobRaw) -> Option<Job> {
    match row.to_domain() {
        Ok(job) => Some(job),
        Err(e) => {
            error!("discarding corrupt job row: {:?}", e);
            None
        }
    }
}

#[async_trait::async_trait]
impl IJobRepo for SqliteJobRepo {
    async fn insert(&self, job: &Job) -> anyhow::Result<()> {
        let payload = serde_json::to_string(&job.payload)?;
        sqlx::query(
            r#"
            INSERT INTO jobs (job_id, fire_at, payload)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(job_id) DO UPDATE SET
                fire_at = excluded.fire_at,
                payload = excluded.payload
            "#,
        )
        .bind(job.id.as_str())
        .bind(job.fire_at.timestamp_millis())
        .bind(payload)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, job_id: &ID) -> Option<Job> {
        let row = sqlx::query_as::<_, JobRaw>(
            "SELECT job_id, fire_at, payload FROM jobs WHERE job_id = ?1",
        )
        .bind(job_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .unwrap_or_else(|e| {
            error!("job lookup failed (id={}): {:?}", job_id, e);
            None
        })?;
        decode_row(row)
    }

    async fn delete(&self, job_id: &ID) -> Option<Job> {
        let row = sqlx::query_as::<_, JobRaw>(
            r#"
            DELETE FROM jobs
            WHERE job_id = ?1
            RETURNING job_id, fire_at, payload
            "#,
        )
        .bind(job_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .unwrap_or_else(|e| {
            error!("job removal failed (id={}): {:?}", job_id, e);
            None
        })?;
        decode_row(row)
    }

    async fn find_all(&self) -> Vec<Job> {
        sqlx::query_as::<_, JobRaw>("SELECT job_id, fire_at, payload FROM jobs")
            .fetch_all(&self.pool)
            .await
            .unwrap_or_else(|e| {
                error!("job listing failed: {:?}", e);
                Vec::new()
            })
            .into_iter()
            .filter_map(decode_row)
            .collect()
    }

    async fn find_due(&self, now: DateTime<Utc>) -> Vec<Job> {
        sqlx::query_as::<_, JobRaw>("SELECT job_id, fire_at, payload FROM jobs WHERE fire_at <= ?1")
            .bind(now.timestamp_millis())
            .fetch_all(&self.pool)
            .await
            .unwrap_or_else(|e| {
                error!("due job query failed: {:?}", e);
                Vec::new()
            })
            .into_iter()
            .filter_map(decode_row)
            .collect()
    }

    async fn next_fire_at(&self) -> Option<DateTime<Utc>> {
        let millis: Option<i64> = sqlx::query_scalar("SELECT MIN(fire_at) FROM jobs")
            .fetch_one(&self.pool)
            .await
            .unwrap_or_else(|e| {
                error!("next fire time query failed: {:?}", e);
                None
            });
        millis.and_then(|ms| Utc.timestamp_millis_opt(ms).single())
    }
}
