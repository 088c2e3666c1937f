use crate::{
    error::EduRemindError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use edu_remind_api_structs::get_import_preview::*;
use edu_remind_domain::ImportPreview;
use edu_remind_infra::EduRemindContext;

pub async fn get_import_preview_controller(
    ctx: web::Data<EduRemindContext>,
) -> Result<HttpResponse, EduRemindError> {
    execute(GetImportPreviewUseCase, &ctx)
        .await
        .map(|preview| HttpResponse::Ok().json(APIResponse::new(preview)))
        .map_err(|e| match e {})
}

#[derive(Debug)]
pub struct GetImportPreviewUseCase;

#[derive(Debug)]
pub enum UseCaseErrors {}

#[async_trait::async_trait(?Send)]
impl UseCase for GetImportPreviewUseCase {
    type Response = ImportPreview;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "GetImportPreview";

    async fn execute(&mut self, ctx: &EduRemindContext) -> Result<Self::Response, Self::Errors> {
        Ok(ctx.repos.import_preview.get().await)
    }
}
