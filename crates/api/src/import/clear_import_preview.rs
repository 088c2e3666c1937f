use crate::{
    error::EduRemindError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use edu_remind_api_structs::clear_import_preview::*;
use edu_remind_domain::ImportPreview;
use edu_remind_infra::EduRemindContext;

pub async fn clear_import_preview_controller(
    ctx: web::Data<EduRemindContext>,
) -> Result<HttpResponse, EduRemindError> {
    execute(ClearImportPreviewUseCase, &ctx)
        .await
        .map(|preview| HttpResponse::Ok().json(APIResponse::new(preview)))
        .map_err(|e| match e {})
}

/// Discards the pending import
#[derive(Debug)]
pub struct ClearImportPreviewUseCase;

#[derive(Debug)]
pub enum UseCaseErrors {}

#[async_trait::async_trait(?Send)]
impl UseCase for ClearImportPreviewUseCase {
    type Response = ImportPreview;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "ClearImportPreview";

    async fn execute(&mut self, ctx: &EduRemindContext) -> Result<Self::Response, Self::Errors> {
        ctx.repos.import_preview.clear().await;
        Ok(ctx.repos.import_preview.get().await)
    }
}
