use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Reference to a message previously delivered on the channel. A chained
/// follow-up threads under its parent through this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageRef(pub i64);

impl Display for MessageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single follow-up attached to a `Reminder`.
///
/// Chaining is one level deep by construction: a child carries text and a
/// fire time only, so the executor has nothing further to recurse into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildReminder {
    pub text: String,
    pub fire_at: DateTime<Utc>,
}

/// The payload delivered on the channel when a job fires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    /// Message body in the channel's rich-text subset.
    pub text: String,
    /// Absolute, timezone-aware fire time.
    pub fire_at: DateTime<Utc>,
    /// Base64 of an already resized and re-encoded JPEG, absent for
    /// text-only reminders.
    pub image: Option<String>,
    pub reply_to: Option<MessageRef>,
    pub child: Option<ChildReminder>,
}
