mod base;
mod reminder;
mod status;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIResponse};
pub use reminder::{CreateReminderInput, ReminderClient};
pub use status::StatusClient;

pub use relance_api_structs::dtos::*;
pub use relance_domain::{
    follow_up_text, translate, ChildReminder, EventDetails, MessageRef, Reminder, ReminderTiming,
    TranslateError, TranslationRequest, ID,
};
pub use relance_utils::{prepare_image, PrepareImageError};

use std::sync::Arc;

/// Relance reminder bot SDK, used by the event-management system to submit,
/// inspect and cancel channel reminders.
pub struct RelanceSDK {
    pub reminder: ReminderClient,
    pub status: StatusClient,
}

impl RelanceSDK {
    pub fn new(address: String) -> Self {
        let base = BaseClient::new(address);
        let base = Arc::new(base);

        Self {
            reminder: ReminderClient::new(base.clone()),
            status: StatusClient::new(base),
        }
    }
}
