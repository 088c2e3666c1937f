use crate::{
    error::EduRemindError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use edu_remind_api_structs::delete_job::*;
use edu_remind_domain::{Job, ID};
use edu_remind_infra::EduRemindContext;

fn handle_error(e: UseCaseErrors) -> EduRemindError {
    match e {
        UseCaseErrors::NotFound(job_id) => EduRemindError::NotFound(format!(
            "The job with id: {}, was not found.",
            job_id
        )),
    }
}

pub async fn delete_job_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<EduRemindContext>,
) -> Result<HttpResponse, EduRemindError> {
    let usecase = DeleteJobUseCase {
        job_id: path_params.job_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|job| HttpResponse::Ok().json(APIResponse::new(job)))
        .map_err(handle_error)
}

/// Campaigns about the job keep referring to it after the deletion
#[derive(Debug)]
pub struct DeleteJobUseCase {
    pub job_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseErrors {
    NotFound(ID),
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteJobUseCase {
    type Response = Job;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "DeleteJob";

    async fn execute(&mut self, ctx: &EduRemindContext) -> Result<Self::Response, Self::Errors> {
        ctx.repos
            .jobs
            .delete(&self.job_id)
            .await
            .ok_or_else(|| UseCaseErrors::NotFound(self.job_id.clone()))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use edu_remind_domain::{Reminder, ReminderType};

    fn job() -> Job {
        Job::new(
            "SDE Intern".into(),
            "Google".into(),
            None,
            String::new(),
            String::new(),
        )
    }

    #[actix_web::test]
    async fn deletes_job_and_keeps_its_campaigns() {
        let ctx = EduRemindContext::create_inmemory();
        let job = job();
        ctx.repos.jobs.insert(&job).await.unwrap();
        let campaign = Reminder::new_sent(
            job.id.clone(),
            ReminderType::NewJob,
            "job_alert_v1".into(),
            0,
            Vec::new(),
        );
        ctx.repos.reminders.insert(&campaign).await.unwrap();

        let mut usecase = DeleteJobUseCase {
            job_id: job.id.clone(),
        };
        assert_eq!(usecase.execute(&ctx).await.unwrap(), job);
        assert!(ctx.repos.jobs.find(&job.id).await.is_none());
        assert_eq!(ctx.repos.reminders.find_all().await.unwrap(), vec![campaign]);
    }

    #[actix_web::test]
    async fn rejects_unknown_job() {
        let ctx = EduRemindContext::create_inmemory();
        let job = job();
        ctx.repos.jobs.insert(&job).await.unwrap();
        let unknown = ID::default();

        let mut usecase = DeleteJobUseCase {
            job_id: unknown.clone(),
        };
        assert_eq!(
            usecase.execute(&ctx).await.unwrap_err(),
            UseCaseErrors::NotFound(unknown)
        );
        assert_eq!(ctx.repos.jobs.find_all().await.unwrap(), vec![job]);
    }
}
