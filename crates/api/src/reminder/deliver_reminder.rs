use super::create_reminder::CreateReminderUseCase;
use crate::shared::usecase::execute;
use relance_domain::{Job, MessageRef, Reminder};
use relance_infra::RelanceContext;
use tracing::{debug, error};

/// What happened to a fired reminder. Failures are terminal: the job was
/// consumed either way and nothing is retried.
#[derive(Debug, Clone, PartialEq)]
pub enum DeliveryOutcome {
    Delivered { message: MessageRef },
    Failed { reason: String },
}

/// Deliver a fired reminder on the channel and, on success, register its
/// follow-up through the same path external submissions take.
///
/// Runs inside the timer's fire callback, so every failure is caught here
/// and folded into the returned outcome instead of propagating.
pub async fn deliver_reminder(job: &Job, ctx: &RelanceContext) -> DeliveryOutcome {
    let reminder = &job.payload;

    let mut image_message = None;
    if let Some(image) = &reminder.image {
        match ctx.messenger.send_image(image).await {
            Ok(message) => image_message = Some(message),
            // The text send still runs: losing the picture should not lose
            // the announcement.
            Err(e) => error!("fail to send reminder image (id={}): {:?}", job.id, e),
        }
    }

    let text_message = match ctx
        .messenger
        .send_text(&reminder.text, reminder.reply_to)
        .await
    {
        Ok(message) => Some(message),
        Err(e) => {
            error!("fail to send reminder message (id={}): {:?}", job.id, e);
            None
        }
    };

    // The follow-up threads under the picture when there is one.
    let message = match image_message.or(text_message) {
        Some(message) => message,
        None => {
            return DeliveryOutcome::Failed {
                reason: format!("no message could be delivered for job {}", job.id),
            }
        }
    };

    if let Some(child) = &reminder.child {
        let follow_up = Reminder {
            text: child.text.clone(),
            fire_at: child.fire_at,
            image: None,
            reply_to: Some(message),
            child: None,
        };
        let usecase = CreateReminderUseCase {
            reminder: follow_up,
            job_id: None,
        };
        match execute(usecase, ctx).await {
            Ok(id) => debug!("follow-up reminder scheduled (id={})", id),
            Err(e) => error!(
                "fail to schedule follow-up reminder (parent={}): {:?}",
                job.id, e
            ),
        }
    }

    DeliveryOutcome::Delivered { message }
}
