mod job;
mod markup;
mod reminder;
mod shared;
mod timing;
mod translate;

pub use job::Job;
pub use markup::{bold, escape, italic, link, strike, underline};
pub use reminder::{ChildReminder, MessageRef, Reminder};
pub use shared::entity::{InvalidIDError, ID};
pub use timing::{resolve_fire_time, ReminderTiming};
pub use translate::{
    follow_up_text, translate, EventDetails, TranslateError, TranslationRequest,
    REMINDER_TEXT_LIMIT,
};
