mod config;
mod repos;
mod services;
mod system;
mod trigger;

pub use config::Config;
pub use repos::{IJobRepo, InMemoryJobRepo, Repos, SqliteJobRepo};
pub use services::{IMessageGateway, InMemoryMessageGateway, SentMessage, TelegramGateway};
pub use system::{ISys, RealSys};
pub use trigger::TimerTrigger;

use std::sync::Arc;
use tracing::warn;

/// Everything a component needs, constructed once at startup and passed
/// down explicitly: no ambient singletons, so tests can swap in doubles for
/// the job store, the messaging channel and the clock.
#[derive(Clone)]
pub struct RelanceContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub messenger: Arc<dyn IMessageGateway>,
    pub timer: Arc<TimerTrigger>,
}

struct ContextParams {
    pub database_url: String,
    pub telegram_token: String,
    pub telegram_group_id: String,
}

impl RelanceContext {
    async fn create(params: ContextParams) -> Self {
        let repos = Repos::create_sqlite(&params.database_url)
            .await
            .expect("Sqlite database must be reachable and migratable");
        Self {
            repos,
            config: Config::new(),
            sys: Arc::new(RealSys {}),
            messenger: Arc::new(TelegramGateway::new(
                params.telegram_token,
                params.telegram_group_id,
            )),
            timer: Arc::new(TimerTrigger::new()),
        }
    }

    /// Context wired entirely with test doubles: volatile store, recording
    /// message gateway, real clock.
    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
            messenger: Arc::new(InMemoryMessageGateway::new()),
            timer: Arc::new(TimerTrigger::new()),
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> RelanceContext {
    RelanceContext::create(ContextParams {
        database_url: get_database_url(),
        telegram_token: get_env_var("BOT_TELEGRAM_TOKEN"),
        telegram_group_id: get_env_var("BOT_TELEGRAM_GROUP_ID"),
    })
    .await
}

fn get_database_url() -> String {
    const DATABASE_URL: &str = "DATABASE_URL";

    std::env::var(DATABASE_URL).unwrap_or_else(|_| {
        warn!(
            "{} env var not set, falling back to a local database file.",
            DATABASE_URL
        );
        "sqlite://reminders.sqlite".to_string()
    })
}

fn get_env_var(var: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| panic!("{} env var to be present.", var))
}
