use crate::{
    error::RelanceError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use relance_api_structs::dtos::ReminderSummaryDTO;
use relance_api_structs::get_reminders::*;
use relance_domain::Job;
use relance_infra::RelanceContext;

fn handle_error(e: UseCaseErrors) -> RelanceError {
    match e {}
}

pub async fn get_reminders_controller(
    ctx: web::Data<RelanceContext>,
) -> Result<HttpResponse, RelanceError> {
    execute(GetRemindersUseCase {}, &ctx)
        .await
        .map(|jobs| {
            let summaries: APIResponse = jobs.into_iter().map(ReminderSummaryDTO::new).collect();
            HttpResponse::Ok().json(summaries)
        })
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct GetRemindersUseCase {}

#[derive(Debug)]
pub enum UseCaseErrors {}

#[async_trait::async_trait(?Send)]
impl UseCase for GetRemindersUseCase {
    type Response = Vec<Job>;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &RelanceContext) -> Result<Self::Response, Self::Errors> {
        Ok(ctx.repos.job_repo.find_all().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use relance_domain::Reminder;

    #[actix_web::test]
    async fn lists_all_pending_jobs() {
        let ctx = RelanceContext::create_inmemory();
        for id in ["r1", "r2"] {
            let job = Job::new(
                id.parse().unwrap(),
                Reminder {
                    text: format!("reminder {}", id),
                    fire_at: Utc::now() + Duration::hours(1),
                    image: None,
                    reply_to: None,
                    child: None,
                },
            );
            ctx.repos.job_repo.insert(&job).await.unwrap();
        }

        let jobs = execute(GetRemindersUseCase {}, &ctx).await.unwrap();
        assert_eq!(jobs.len(), 2);
    }
}
