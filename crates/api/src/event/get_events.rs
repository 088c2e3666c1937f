use crate::{
    error::EduRemindError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use edu_remind_api_structs::get_events::*;
use edu_remind_domain::Event;
use edu_remind_infra::EduRemindContext;

pub async fn get_events_controller(
    query: web::Query<QueryParams>,
    ctx: web::Data<EduRemindContext>,
) -> Result<HttpResponse, EduRemindError> {
    let usecase = GetEventsUseCase {
        search: query.0.search,
    };

    execute(usecase, &ctx)
        .await
        .map(|events| HttpResponse::Ok().json(APIResponse::new(events)))
        .map_err(|_| EduRemindError::InternalError)
}

/// Events newest first, optionally filtered by name
#[derive(Debug)]
pub struct GetEventsUseCase {
    pub search: Option<String>,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetEventsUseCase {
    type Response = Vec<Event>;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "GetEvents";

    async fn execute(&mut self, ctx: &EduRemindContext) -> Result<Self::Response, Self::Errors> {
        let events = ctx
            .repos
            .events
            .find_all()
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;
        let term = self.search.as_deref().unwrap_or_default().trim();
        Ok(events
            .into_iter()
            .rev()
            .filter(|e| e.matches_search(term))
            .collect())
    }
}
