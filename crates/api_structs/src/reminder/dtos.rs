use chrono::{DateTime, Utc};
use relance_domain::{ChildReminder, Job, MessageRef, Reminder, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChildReminderDTO {
    pub text: String,
    pub fire_at: DateTime<Utc>,
}

impl ChildReminderDTO {
    pub fn new(child: ChildReminder) -> Self {
        Self {
            text: child.text,
            fire_at: child.fire_at,
        }
    }

    pub fn to_domain(self) -> ChildReminder {
        ChildReminder {
            text: self.text,
            fire_at: self.fire_at,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReminderDTO {
    pub text: String,
    pub fire_at: DateTime<Utc>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub reply_to: Option<MessageRef>,
    #[serde(default)]
    pub child: Option<ChildReminderDTO>,
}

impl ReminderDTO {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            text: reminder.text,
            fire_at: reminder.fire_at,
            image: reminder.image,
            reply_to: reminder.reply_to,
            child: reminder.child.map(ChildReminderDTO::new),
        }
    }

    pub fn to_domain(self) -> Reminder {
        Reminder {
            text: self.text,
            fire_at: self.fire_at,
            image: self.image,
            reply_to: self.reply_to,
            child: self.child.map(ChildReminderDTO::to_domain),
        }
    }
}

/// Listing row: enough to recognise a pending reminder without shipping the
/// whole payload.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReminderSummaryDTO {
    pub id: ID,
    pub text: String,
    pub fire_at: DateTime<Utc>,
}

impl ReminderSummaryDTO {
    pub fn new(job: Job) -> Self {
        Self {
            id: job.id,
            fire_at: job.fire_at,
            text: job.payload.text,
        }
    }
}
