use crate::{
    error::EduRemindError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use edu_remind_api_structs::get_message_logs::*;
use edu_remind_domain::MessageLog;
use edu_remind_infra::EduRemindContext;

pub async fn get_message_logs_controller(
    query: web::Query<QueryParams>,
    ctx: web::Data<EduRemindContext>,
) -> Result<HttpResponse, EduRemindError> {
    let usecase = GetMessageLogsUseCase {
        search: query.0.search,
    };

    execute(usecase, &ctx)
        .await
        .map(|logs| HttpResponse::Ok().json(APIResponse::new(logs)))
        .map_err(|_| EduRemindError::InternalError)
}

/// The audit trail newest first. The search term matches the recipient or
/// the event name.
#[derive(Debug)]
pub struct GetMessageLogsUseCase {
    pub search: Option<String>,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetMessageLogsUseCase {
    type Response = Vec<MessageLog>;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "GetMessageLogs";

    async fn execute(&mut self, ctx: &EduRemindContext) -> Result<Self::Response, Self::Errors> {
        let logs = ctx
            .repos
            .message_logs
            .find_all()
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;
        let term = self.search.as_deref().unwrap_or_default().trim();
        Ok(logs
            .into_iter()
            .rev()
            .filter(|log| log.matches_search(term))
            .collect())
    }
}
