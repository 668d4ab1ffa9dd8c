use crate::{APIResponse, BaseClient};
use relance_api_structs::dtos::ReminderDTO;
use relance_api_structs::*;
use relance_domain::{Reminder, ID};
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct ReminderClient {
    base: Arc<BaseClient>,
}

pub struct CreateReminderInput {
    pub reminder: Reminder,
    /// Reuse an id to overwrite a pending reminder in place.
    pub id: Option<ID>,
}

impl ReminderClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(
        &self,
        input: CreateReminderInput,
    ) -> APIResponse<create_reminder::APIResponse> {
        let path = match input.id {
            Some(id) => format!("reminders?id={}", id),
            None => "reminders".to_string(),
        };
        let body: create_reminder::RequestBody = ReminderDTO::new(input.reminder);

        self.base.post(body, path, StatusCode::OK).await
    }

    pub async fn list(&self) -> APIResponse<get_reminders::APIResponse> {
        self.base.get("reminders".to_string(), StatusCode::OK).await
    }

    pub async fn get(&self, reminder_id: ID) -> APIResponse<get_reminder::APIResponse> {
        self.base
            .get(format!("reminders/{}", reminder_id), StatusCode::OK)
            .await
    }

    pub async fn delete(&self, reminder_id: ID) -> APIResponse<delete_reminder::APIResponse> {
        self.base
            .delete(format!("reminders/{}", reminder_id), StatusCode::OK)
            .await
    }
}
