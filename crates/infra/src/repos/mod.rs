mod job;

pub use job::{IJobRepo, InMemoryJobRepo, SqliteJobRepo};

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct Repos {
    pub job_repo: Arc<dyn IJobRepo>,
}

impl Repos {
    pub async fn create_sqlite(database_url: &str) -> anyhow::Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal);

        info!("DB CHECKING CONNECTION ...");
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;
        sqlx::migrate!().run(&pool).await?;
        info!("DB CHECKING CONNECTION ... [done]");

        Ok(Self {
            job_repo: Arc::new(SqliteJobRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            job_repo: Arc::new(InMemoryJobRepo::new()),
        }
    }
}
