use crate::{
    error::RelanceError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use relance_api_structs::create_reminder::*;
use relance_domain::{Job, Reminder, ID};
use relance_infra::RelanceContext;
use tracing::debug;

fn handle_error(e: UseCaseErrors) -> RelanceError {
    match e {
        UseCaseErrors::StorageError => RelanceError::InternalError,
    }
}

pub async fn create_reminder_controller(
    query_params: web::Query<QueryParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<RelanceContext>,
) -> Result<HttpResponse, RelanceError> {
    let usecase = CreateReminderUseCase {
        reminder: body.into_inner().to_domain(),
        job_id: query_params.into_inner().id,
    };

    execute(usecase, &ctx)
        .await
        .map(|id| HttpResponse::Ok().json(APIResponse { id }))
        .map_err(handle_error)
}

/// Persist and arm a reminder. This is the single registration path: the
/// executor resubmits chained follow-ups through it as well, so they get the
/// same id generation and durability as any external submission.
#[derive(Debug)]
pub struct CreateReminderUseCase {
    pub reminder: Reminder,
    /// Caller-supplied id, used by the replace flow to overwrite a job in
    /// place. A fresh id is generated when absent.
    pub job_id: Option<ID>,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateReminderUseCase {
    type Response = ID;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &RelanceContext) -> Result<Self::Response, Self::Errors> {
        let id = self.job_id.clone().unwrap_or_default();
        let job = Job::new(id.clone(), self.reminder.clone());

        ctx.repos
            .job_repo
            .insert(&job)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;
        ctx.timer.wake();

        debug!(
            "reminder scheduled (id={}, fire_at={}, image={}, child={})",
            id,
            job.fire_at,
            job.payload.image.is_some(),
            job.payload.child.is_some()
        );

        Ok(id)
    }
}
