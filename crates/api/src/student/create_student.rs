use crate::{
    error::EduRemindError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use edu_remind_api_structs::create_student::*;
use edu_remind_domain::{Student, StudentFields};
use edu_remind_infra::EduRemindContext;

fn handle_error(e: UseCaseErrors) -> EduRemindError {
    match e {
        UseCaseErrors::MissingNameOrPhone => {
            EduRemindError::BadClientData("A student needs both a name and a phone".into())
        }
        UseCaseErrors::StorageError => EduRemindError::InternalError,
    }
}

pub async fn create_student_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<EduRemindContext>,
) -> Result<HttpResponse, EduRemindError> {
    let body = body.0;
    let usecase = CreateStudentUseCase {
        fields: StudentFields {
            name: body.name,
            phone: body.phone,
            email: body.email.unwrap_or_default(),
            department: body.department.unwrap_or_default(),
            batch: body.batch.unwrap_or_default(),
        },
    };

    execute(usecase, &ctx)
        .await
        .map(|student| HttpResponse::Created().json(APIResponse::new(student)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct CreateStudentUseCase {
    pub fields: StudentFields,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseErrors {
    MissingNameOrPhone,
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateStudentUseCase {
    type Response = Student;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "CreateStudent";

    async fn execute(&mut self, ctx: &EduRemindContext) -> Result<Self::Response, Self::Errors> {
        if self.fields.name.trim().is_empty() || self.fields.phone.trim().is_empty() {
            return Err(UseCaseErrors::MissingNameOrPhone);
        }

        let student = Student::new(std::mem::take(&mut self.fields), true);
        ctx.repos
            .students
            .insert(&student)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        Ok(student)
    }
}
