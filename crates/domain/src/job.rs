use crate::{shared::entity::ID, Reminder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted, time-triggered unit of work wrapping a `Reminder`.
///
/// Created on registry submission, mutated only by replacement, destroyed
/// when it fires or is cancelled. One-shot, never recurring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: ID,
    pub fire_at: DateTime<Utc>,
    pub payload: Reminder,
}

impl Job {
    pub fn new(id: ID, payload: Reminder) -> Self {
        Self {
            id,
            fire_at: payload.fire_at,
            payload,
        }
    }
}
