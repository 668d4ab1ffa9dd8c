use std::time::Duration;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Upper bound on how long the job timer sleeps between store polls.
    /// The timer is normally woken earlier, either by the next fire time or
    /// by the trigger when the pending set changes.
    pub timer_max_tick: Duration,
}

impl Config {
    pub fn new() -> Self {
        let default_port = "5000";
        let port = std::env::var("PORT").unwrap_or(default_port.into());
        let port = match port.parse::<usize>() {
            Ok(port) => port,
            Err(_) => {
                warn!(
                    "The given PORT: {} is not valid, falling back to the default port: {}.",
                    port, default_port
                );
                default_port.parse::<usize>().unwrap()
            }
        };

        let default_tick = "30";
        let tick = std::env::var("TIMER_MAX_TICK_SECS").unwrap_or(default_tick.into());
        let tick = match tick.parse::<u64>() {
            Ok(tick) if tick > 0 => tick,
            _ => {
                warn!(
                    "The given TIMER_MAX_TICK_SECS: {} is not valid, falling back to the default: {}.",
                    tick, default_tick
                );
                default_tick.parse::<u64>().unwrap()
            }
        };

        Self {
            port,
            timer_max_tick: Duration::from_secs(tick),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
