use crate::{
    error::EduRemindError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use edu_remind_api_structs::generate_template_params::*;
use edu_remind_domain::{fallback_template_params, Job, ReminderType, ID};
use edu_remind_infra::EduRemindContext;
use tracing::warn;

fn handle_error(e: UseCaseErrors) -> EduRemindError {
    match e {
        UseCaseErrors::JobNotFound(job_id) => EduRemindError::NotFound(format!(
            "The job with id: {}, was not found.",
            job_id
        )),
    }
}

pub async fn generate_template_params_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<EduRemindContext>,
) -> Result<HttpResponse, EduRemindError> {
    let usecase = GenerateTemplateParamsUseCase {
        job_id: body.job_id.clone(),
        reminder_type: body.reminder_type,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| {
            HttpResponse::Ok().json(APIResponse {
                params: res.params,
                is_fallback: res.is_fallback,
            })
        })
        .map_err(handle_error)
}

#[derive(Debug, PartialEq)]
pub struct TemplateParams {
    pub params: Vec<String>,
    pub is_fallback: bool,
}

/// Asks the provider for the parameters of a campaign about `job`, using the
/// first registry student as the sample recipient. Provider failures are
/// not surfaced: the plain job values are used instead.
pub async fn template_params_for(
    job: &Job,
    reminder_type: ReminderType,
    ctx: &EduRemindContext,
) -> TemplateParams {
    let students = match ctx.repos.students.find_all().await {
        Ok(students) => students,
        Err(e) => {
            warn!(
                "Unable to load a sample student for job {}, continuing without one. Error: {:?}",
                job.id, e
            );
            Vec::new()
        }
    };
    let sample = students.first();

    match ctx
        .services
        .template_params
        .generate(job, sample, reminder_type)
        .await
    {
        Ok(params) => TemplateParams {
            params,
            is_fallback: false,
        },
        Err(e) => {
            warn!(
                "Template parameter generation failed for job {}, using job values. Error: {:?}",
                job.id, e
            );
            TemplateParams {
                params: fallback_template_params(job, sample),
                is_fallback: true,
            }
        }
    }
}

#[derive(Debug)]
pub struct GenerateTemplateParamsUseCase {
    pub job_id: ID,
    pub reminder_type: ReminderType,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseErrors {
    JobNotFound(ID),
}

#[async_trait::async_trait(?Send)]
impl UseCase for GenerateTemplateParamsUseCase {
    type Response = TemplateParams;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "GenerateTemplateParams";

    async fn execute(&mut self, ctx: &EduRemindContext) -> Result<Self::Response, Self::Errors> {
        let job = ctx
            .repos
            .jobs
            .find(&self.job_id)
            .await
            .ok_or_else(|| UseCaseErrors::JobNotFound(self.job_id.clone()))?;

        Ok(template_params_for(&job, self.reminder_type, ctx).await)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveDate;
    use edu_remind_domain::{Student, StudentFields, PLACEHOLDER_STUDENT_NAME};
    use edu_remind_infra::IStudentRepo;
    use std::sync::Arc;

    struct UnreachableStudentRepo;

    #[async_trait::async_trait]
    impl IStudentRepo for UnreachableStudentRepo {
        async fn insert(&self, _student: &Student) -> anyhow::Result<()> {
            Err(anyhow::anyhow!("storage offline"))
        }
        async fn insert_many(&self, _students: &[Student]) -> anyhow::Result<()> {
            Err(anyhow::anyhow!("storage offline"))
        }
        async fn find(&self, _student_id: &ID) -> Option<Student> {
            None
        }
        async fn find_all(&self) -> anyhow::Result<Vec<Student>> {
            Err(anyhow::anyhow!("storage offline"))
        }
        async fn toggle_opt_in(&self, _student_id: &ID) -> Option<Student> {
            None
        }
        async fn delete(&self, _student_id: &ID) -> Option<Student> {
            None
        }
    }

    #[actix_web::test]
    async fn falls_back_to_job_values() {
        let ctx = EduRemindContext::create_inmemory();
        let job = Job::new(
            "SDE Intern".into(),
            "Google".into(),
            NaiveDate::from_ymd_opt(2024, 12, 15),
            "https://careers.google.com".into(),
            "".into(),
        );
        ctx.repos.jobs.insert(&job).await.unwrap();
        let student = Student::new(
            StudentFields {
                name: "Rahul".into(),
                phone: "9876543210".into(),
                ..Default::default()
            },
            true,
        );
        ctx.repos.students.insert(&student).await.unwrap();

        let mut usecase = GenerateTemplateParamsUseCase {
            job_id: job.id.clone(),
            reminder_type: ReminderType::NewJob,
        };
        let res = usecase.execute(&ctx).await.unwrap();
        assert!(res.is_fallback);
        assert_eq!(
            res.params,
            vec![
                "Rahul",
                "SDE Intern",
                "Google",
                "2024-12-15",
                "https://careers.google.com"
            ]
        );
    }

    #[actix_web::test]
    async fn rejects_unknown_job() {
        let ctx = EduRemindContext::create_inmemory();
        let job_id = ID::default();
        let mut usecase = GenerateTemplateParamsUseCase {
            job_id: job_id.clone(),
            reminder_type: ReminderType::Deadline,
        };
        assert_eq!(
            usecase.execute(&ctx).await,
            Err(UseCaseErrors::JobNotFound(job_id))
        );
    }

    #[actix_web::test]
    async fn uses_placeholder_when_students_cannot_be_loaded() {
        let mut ctx = EduRemindContext::create_inmemory();
        ctx.repos.students = Arc::new(UnreachableStudentRepo);
        let job = Job::new(
            "Analyst".into(),
            "Deloitte".into(),
            None,
            "".into(),
            "".into(),
        );
        ctx.repos.jobs.insert(&job).await.unwrap();

        let mut usecase = GenerateTemplateParamsUseCase {
            job_id: job.id.clone(),
            reminder_type: ReminderType::Deadline,
        };
        let res = usecase.execute(&ctx).await.unwrap();
        assert!(res.is_fallback);
        assert_eq!(res.params[0], PLACEHOLDER_STUDENT_NAME);
        assert_eq!(res.params[1], "Analyst");
    }
}
