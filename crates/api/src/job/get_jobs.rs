use crate::{
    error::EduRemindError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use edu_remind_api_structs::get_jobs::*;
use edu_remind_domain::Job;
use edu_remind_infra::EduRemindContext;

pub async fn get_jobs_controller(
    ctx: web::Data<EduRemindContext>,
) -> Result<HttpResponse, EduRemindError> {
    execute(GetJobsUseCase, &ctx)
        .await
        .map(|jobs| HttpResponse::Ok().json(APIResponse::new(jobs)))
        .map_err(|_| EduRemindError::InternalError)
}

/// The job catalog, newest first
#[derive(Debug)]
pub struct GetJobsUseCase;

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetJobsUseCase {
    type Response = Vec<Job>;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "GetJobs";

    async fn execute(&mut self, ctx: &EduRemindContext) -> Result<Self::Response, Self::Errors> {
        let mut jobs = ctx
            .repos
            .jobs
            .find_all()
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;
        jobs.reverse();
        Ok(jobs)
    }
}
