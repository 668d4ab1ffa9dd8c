use crate::{
    error::RelanceError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use relance_api_structs::dtos::ReminderDTO;
use relance_api_structs::get_reminder::*;
use relance_domain::{Job, ID};
use relance_infra::RelanceContext;

fn handle_error(e: UseCaseErrors) -> RelanceError {
    match e {
        UseCaseErrors::NotFound(reminder_id) => RelanceError::NotFound(format!(
            "The reminder with id: {}, was not found.",
            reminder_id
        )),
    }
}

pub async fn get_reminder_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<RelanceContext>,
) -> Result<HttpResponse, RelanceError> {
    let usecase = GetReminderUseCase {
        reminder_id: path_params.reminder_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|job| HttpResponse::Ok().json(ReminderDTO::new(job.payload)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct GetReminderUseCase {
    pub reminder_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetReminderUseCase {
    type Response = Job;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &RelanceContext) -> Result<Self::Response, Self::Errors> {
        ctx.repos
            .job_repo
            .find(&self.reminder_id)
            .await
            .ok_or_else(|| UseCaseErrors::NotFound(self.reminder_id.clone()))
    }
}
