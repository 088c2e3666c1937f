use crate::{
    error::EduRemindError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use edu_remind_api_structs::commit_import::*;
use edu_remind_domain::ImportError;
use edu_remind_infra::EduRemindContext;

fn handle_error(e: UseCaseErrors) -> EduRemindError {
    match e {
        UseCaseErrors::EmptyPreview => {
            EduRemindError::EmptyImport(ImportError::EmptyPreview.to_string())
        }
        UseCaseErrors::StorageError => EduRemindError::InternalError,
    }
}

pub async fn commit_import_controller(
    ctx: web::Data<EduRemindContext>,
) -> Result<HttpResponse, EduRemindError> {
    execute(CommitImportUseCase, &ctx)
        .await
        .map(|res| {
            HttpResponse::Ok().json(APIResponse {
                committed: res.committed,
                total_students: res.total_students,
            })
        })
        .map_err(handle_error)
}

/// Appends every pending candidate to the registry and clears the preview
#[derive(Debug)]
pub struct CommitImportUseCase;

#[derive(Debug, PartialEq)]
pub struct UseCaseResponse {
    pub committed: usize,
    pub total_students: usize,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseErrors {
    EmptyPreview,
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for CommitImportUseCase {
    type Response = UseCaseResponse;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "CommitImport";

    async fn execute(&mut self, ctx: &EduRemindContext) -> Result<Self::Response, Self::Errors> {
        let candidates = ctx
            .repos
            .import_preview
            .take_for_commit()
            .await
            .map_err(|e| match e {
                ImportError::EmptyPreview => UseCaseErrors::EmptyPreview,
            })?;

        if ctx.repos.students.insert_many(&candidates).await.is_err() {
            // Put the candidates back so the operator can retry
            ctx.repos.import_preview.set(candidates).await;
            return Err(UseCaseErrors::StorageError);
        }

        let total_students = ctx
            .repos
            .students
            .find_all()
            .await
            .map_err(|_| UseCaseErrors::StorageError)?
            .len();

        Ok(UseCaseResponse {
            committed: candidates.len(),
            total_students,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use edu_remind_domain::import::parse_pasted_text;

    #[actix_web::test]
    async fn appends_candidates_after_existing_students() {
        let ctx = EduRemindContext::create_inmemory();
        let existing = parse_pasted_text("Old One, 9111111111\nOld Two, 9222222222");
        ctx.repos.students.insert_many(&existing).await.unwrap();

        let candidates = parse_pasted_text("New One, 9333333333\nOld One, 9111111111\nBad, 1");
        ctx.repos.import_preview.set(candidates.clone()).await;

        let res = CommitImportUseCase.execute(&ctx).await.unwrap();
        assert_eq!(
            res,
            UseCaseResponse {
                committed: 3,
                total_students: 5
            }
        );

        let students = ctx.repos.students.find_all().await.unwrap();
        assert_eq!(&students[..2], &existing[..]);
        assert_eq!(&students[2..], &candidates[..]);
        assert!(ctx.repos.import_preview.get().await.is_empty());
    }

    #[actix_web::test]
    async fn rejects_empty_preview() {
        let ctx = EduRemindContext::create_inmemory();
        assert_eq!(
            CommitImportUseCase.execute(&ctx).await,
            Err(UseCaseErrors::EmptyPreview)
        );
        assert!(ctx.repos.students.find_all().await.unwrap().is_empty());
    }
}
