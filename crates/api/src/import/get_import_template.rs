use crate::{
    error::EduRemindError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{http::header, web, HttpResponse};
use edu_remind_api_structs::get_import_template::*;
use edu_remind_infra::{EduRemindContext, IMPORT_TEMPLATE_FILE_NAME};

pub async fn get_import_template_controller(
    ctx: web::Data<EduRemindContext>,
) -> Result<HttpResponse, EduRemindError> {
    execute(GetImportTemplateUseCase, &ctx)
        .await
        .map(|workbook| {
            HttpResponse::Ok()
                .insert_header((header::CONTENT_TYPE, CONTENT_TYPE))
                .insert_header((
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", IMPORT_TEMPLATE_FILE_NAME),
                ))
                .body(workbook)
        })
        .map_err(|_| EduRemindError::InternalError)
}

/// Builds the workbook the operator fills in for a bulk import
#[derive(Debug)]
pub struct GetImportTemplateUseCase;

#[derive(Debug)]
pub enum UseCaseErrors {
    WorkbookError(String),
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetImportTemplateUseCase {
    type Response = Vec<u8>;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "GetImportTemplate";

    async fn execute(&mut self, ctx: &EduRemindContext) -> Result<Self::Response, Self::Errors> {
        ctx.services
            .spreadsheets
            .import_template()
            .map_err(|e| UseCaseErrors::WorkbookError(e.to_string()))
    }
}
