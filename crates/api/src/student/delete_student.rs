use crate::{
    error::EduRemindError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use edu_remind_api_structs::delete_student::*;
use edu_remind_domain::{Student, ID};
use edu_remind_infra::EduRemindContext;

fn handle_error(e: UseCaseErrors) -> EduRemindError {
    match e {
        UseCaseErrors::NotFound(student_id) => EduRemindError::NotFound(format!(
            "The student with id: {}, was not found.",
            student_id
        )),
    }
}

pub async fn delete_student_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<EduRemindContext>,
) -> Result<HttpResponse, EduRemindError> {
    let usecase = DeleteStudentUseCase {
        student_id: path_params.student_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|student| HttpResponse::Ok().json(APIResponse::new(student)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct DeleteStudentUseCase {
    pub student_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseErrors {
    NotFound(ID),
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteStudentUseCase {
    type Response = Student;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "DeleteStudent";

    async fn execute(&mut self, ctx: &EduRemindContext) -> Result<Self::Response, Self::Errors> {
        ctx.repos
            .students
            .delete(&self.student_id)
            .await
            .ok_or_else(|| UseCaseErrors::NotFound(self.student_id.clone()))
    }
}
