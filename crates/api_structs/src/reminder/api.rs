use crate::dtos::{ReminderDTO, ReminderSummaryDTO};
use relance_domain::ID;
use serde::{Deserialize, Serialize};

pub mod create_reminder {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct QueryParams {
        #[serde(default)]
        pub id: Option<ID>,
    }

    pub type RequestBody = ReminderDTO;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct APIResponse {
        pub id: ID,
    }
}

pub mod get_reminders {
    use super::*;

    pub type APIResponse = Vec<ReminderSummaryDTO>;
}

pub mod get_reminder {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct PathParams {
        pub reminder_id: ID,
    }

    pub type APIResponse = ReminderDTO;
}

pub mod delete_reminder {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct PathParams {
        pub reminder_id: ID,
    }

    pub type APIResponse = ReminderDTO;
}
