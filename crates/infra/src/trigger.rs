use tokio::sync::Notify;

/// Wakes the job timer loop when the set of pending jobs changes, so a newly
/// created reminder is armed without waiting out the current tick.
pub struct TimerTrigger {
    notify: Notify,
}

impl TimerTrigger {
    pub fn new() -> Self {
        Self {
            notify: Notify::new(),
        }
    }

    /// Signal the timer loop. A permit is stored when the loop is mid-fire,
    /// so wake-ups between waits are not lost.
    pub fn wake(&self) {
        self.notify.notify_one();
    }

    pub async fn notified(&self) {
        self.notify.notified().await;
    }
}

impl Default for TimerTrigger {
    fn default() -> Self {
        Self::new()
    }
}
