use crate::reminder::{deliver_reminder, DeliveryOutcome};
use relance_infra::RelanceContext;
use std::time::Duration;
use tracing::{debug, error};

/// Spawn the timer loop that fires due jobs.
///
/// The loop sleeps until the next fire time, bounded by the configured
/// maximum tick, and is woken early through the context trigger whenever the
/// pending set changes. With nothing scheduled it idles on the bounded tick.
pub fn start_job_timer(ctx: RelanceContext) {
    actix_web::rt::spawn(run_job_timer(ctx));
}

async fn run_job_timer(ctx: RelanceContext) {
    loop {
        fire_due_jobs(&ctx).await;

        let sleep_for = match ctx.repos.job_repo.next_fire_at().await {
            Some(fire_at) => {
                let until_due = (fire_at - ctx.sys.get_utc_now())
                    .to_std()
                    .unwrap_or(Duration::ZERO);
                until_due.min(ctx.config.timer_max_tick)
            }
            None => ctx.config.timer_max_tick,
        };

        tokio::select! {
            _ = ctx.timer.notified() => {}
            _ = tokio::time::sleep(sleep_for) => {}
        }
    }
}

/// Fire every due job: hand it to the executor, then drop it from the store.
///
/// At most once per id under normal operation. A crash between the spawn and
/// the persisted removal may redeliver after a restart; that gap is accepted
/// rather than papered over. A job whose fire time is already past when it is
/// first seen (e.g. right after a restart) fires immediately.
pub(crate) async fn fire_due_jobs(ctx: &RelanceContext) {
    let due = ctx.repos.job_repo.find_due(ctx.sys.get_utc_now()).await;

    for job in due {
        let job_id = job.id.clone();
        let task_ctx = ctx.clone();
        // Delivery runs on its own task so slow channel I/O cannot stall the
        // timing loop for unrelated jobs.
        actix_web::rt::spawn(async move {
            match deliver_reminder(&job, &task_ctx).await {
                DeliveryOutcome::Delivered { message } => {
                    debug!("reminder posted (id={}, message={})", job.id, message)
                }
                DeliveryOutcome::Failed { reason } => {
                    error!("reminder lost (id={}): {}", job.id, reason)
                }
            }
        });

        ctx.repos.job_repo.delete(&job_id).await;
    }
}
