use crate::{
    error::RelanceError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use relance_api_structs::delete_reminder::*;
use relance_api_structs::dtos::ReminderDTO;
use relance_domain::{Job, ID};
use relance_infra::RelanceContext;
use tracing::debug;

fn handle_error(e: UseCaseErrors) -> RelanceError {
    match e {
        UseCaseErrors::NotFound(reminder_id) => RelanceError::NotFound(format!(
            "The reminder with id: {}, was not found.",
            reminder_id
        )),
    }
}

pub async fn delete_reminder_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<RelanceContext>,
) -> Result<HttpResponse, RelanceError> {
    let usecase = DeleteReminderUseCase {
        reminder_id: path_params.reminder_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|job| HttpResponse::Ok().json(ReminderDTO::new(job.payload)))
        .map_err(handle_error)
}

/// Cancel a pending reminder. Cancellation is best-effort: a job that
/// already fired is gone from the store, so the caller sees "not found"
/// after losing that race.
#[derive(Debug)]
pub struct DeleteReminderUseCase {
    pub reminder_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteReminderUseCase {
    type Response = Job;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &RelanceContext) -> Result<Self::Response, Self::Errors> {
        match ctx.repos.job_repo.delete(&self.reminder_id).await {
            Some(job) => {
                ctx.timer.wake();
                debug!("reminder cancelled (id={})", self.reminder_id);
                Ok(job)
            }
            None => Err(UseCaseErrors::NotFound(self.reminder_id.clone())),
        }
    }
}
