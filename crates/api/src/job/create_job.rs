use crate::{
    error::EduRemindError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use edu_remind_api_structs::create_job::*;
use edu_remind_domain::Job;
use edu_remind_infra::EduRemindContext;

fn handle_error(e: UseCaseErrors) -> EduRemindError {
    match e {
        UseCaseErrors::MissingTitleOrCompany => {
            EduRemindError::BadClientData("A job needs both a title and a company".into())
        }
        UseCaseErrors::StorageError => EduRemindError::InternalError,
    }
}

pub async fn create_job_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<EduRemindContext>,
) -> Result<HttpResponse, EduRemindError> {
    let body = body.0;
    let usecase = CreateJobUseCase {
        title: body.title,
        company: body.company,
        deadline: body.deadline,
        link: body.link.unwrap_or_default(),
        description: body.description.unwrap_or_default(),
    };

    execute(usecase, &ctx)
        .await
        .map(|job| HttpResponse::Created().json(APIResponse::new(job)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct CreateJobUseCase {
    pub title: String,
    pub company: String,
    pub deadline: Option<NaiveDate>,
    pub link: String,
    pub description: String,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseErrors {
    MissingTitleOrCompany,
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateJobUseCase {
    type Response = Job;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "CreateJob";

    async fn execute(&mut self, ctx: &EduRemindContext) -> Result<Self::Response, Self::Errors> {
        let title = self.title.trim();
        let company = self.company.trim();
        if title.is_empty() || company.is_empty() {
            return Err(UseCaseErrors::MissingTitleOrCompany);
        }

        let job = Job::new(
            title.to_string(),
            company.to_string(),
            self.deadline,
            self.link.trim().to_string(),
            std::mem::take(&mut self.description),
        );
        ctx.repos
            .jobs
            .insert(&job)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        Ok(job)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::job::get_jobs::GetJobsUseCase;

    fn usecase(title: &str, company: &str) -> CreateJobUseCase {
        CreateJobUseCase {
            title: title.into(),
            company: company.into(),
            deadline: NaiveDate::from_ymd_opt(2024, 12, 15),
            link: "https://careers.example.com".into(),
            description: "".into(),
        }
    }

    #[actix_web::test]
    async fn creates_jobs_listed_newest_first() {
        let ctx = EduRemindContext::create_inmemory();
        let first = usecase("SDE Intern", "Google").execute(&ctx).await.unwrap();
        let second = usecase("Data Analyst", "Amazon").execute(&ctx).await.unwrap();

        let jobs = GetJobsUseCase.execute(&ctx).await.unwrap();
        assert_eq!(jobs, vec![second, first]);
    }

    #[actix_web::test]
    async fn requires_title_and_company() {
        let ctx = EduRemindContext::create_inmemory();
        assert_eq!(
            usecase("SDE Intern", " ").execute(&ctx).await,
            Err(UseCaseErrors::MissingTitleOrCompany)
        );
        assert_eq!(
            usecase("", "Google").execute(&ctx).await,
            Err(UseCaseErrors::MissingTitleOrCompany)
        );
    }
}
