use crate::{
    error::EduRemindError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use edu_remind_api_structs::parse_import_text::*;
use edu_remind_domain::{import::parse_pasted_text, ImportPreview};
use edu_remind_infra::EduRemindContext;

pub async fn parse_import_text_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<EduRemindContext>,
) -> Result<HttpResponse, EduRemindError> {
    let usecase = ParseImportTextUseCase { text: body.0.text };

    execute(usecase, &ctx)
        .await
        .map(|preview| HttpResponse::Ok().json(APIResponse::new(preview)))
        .map_err(|e| match e {})
}

/// Replaces the import preview with the students parsed from pasted text
#[derive(Debug)]
pub struct ParseImportTextUseCase {
    pub text: String,
}

#[derive(Debug)]
pub enum UseCaseErrors {}

#[async_trait::async_trait(?Send)]
impl UseCase for ParseImportTextUseCase {
    type Response = ImportPreview;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "ParseImportText";

    async fn execute(&mut self, ctx: &EduRemindContext) -> Result<Self::Response, Self::Errors> {
        ctx.repos
            .import_preview
            .set(parse_pasted_text(&self.text))
            .await;
        Ok(ctx.repos.import_preview.get().await)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[actix_web::test]
    async fn reparsing_replaces_the_preview() {
        let ctx = EduRemindContext::create_inmemory();
        let mut usecase = ParseImportTextUseCase {
            text: "Rahul, 9876543210\nPriya, 12345\n\n".into(),
        };
        let preview = usecase.execute(&ctx).await.unwrap();
        assert_eq!(preview.candidates().len(), 2);
        assert_eq!(preview.summary().invalid, 1);

        let mut usecase = ParseImportTextUseCase {
            text: "Asha\t919000000000".into(),
        };
        let preview = usecase.execute(&ctx).await.unwrap();
        assert_eq!(preview.candidates().len(), 1);
        assert_eq!(preview.candidates()[0].phone, "919000000000");
        assert!(ctx.repos.students.find_all().await.unwrap().is_empty());
    }
}
