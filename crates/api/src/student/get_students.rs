use crate::{
    error::EduRemindError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use edu_remind_api_structs::get_students::*;
use edu_remind_domain::Student;
use edu_remind_infra::EduRemindContext;

pub async fn get_students_controller(
    query: web::Query<QueryParams>,
    ctx: web::Data<EduRemindContext>,
) -> Result<HttpResponse, EduRemindError> {
    let usecase = GetStudentsUseCase {
        search: query.0.search,
    };

    execute(usecase, &ctx)
        .await
        .map(|students| HttpResponse::Ok().json(APIResponse::new(students)))
        .map_err(|_| EduRemindError::InternalError)
}

#[derive(Debug)]
pub struct GetStudentsUseCase {
    pub search: Option<String>,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetStudentsUseCase {
    type Response = Vec<Student>;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "GetStudents";

    async fn execute(&mut self, ctx: &EduRemindContext) -> Result<Self::Response, Self::Errors> {
        let students = ctx
            .repos
            .students
            .find_all()
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;
        Ok(match &self.search {
            Some(term) => students
                .into_iter()
                .filter(|s| s.matches_search(term.trim()))
                .collect(),
            None => students,
        })
    }
}
