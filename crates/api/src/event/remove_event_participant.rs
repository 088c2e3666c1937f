use crate::{
    error::EduRemindError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use edu_remind_api_structs::remove_event_participant::*;
use edu_remind_domain::{Event, ID};
use edu_remind_infra::{EduRemindContext, EventUpdateError};

fn handle_error(e: UseCaseErrors) -> EduRemindError {
    match e {
        UseCaseErrors::EventNotFound(event_id) => EduRemindError::NotFound(format!(
            "The event with id: {}, was not found.",
            event_id
        )),
        UseCaseErrors::ParticipantNotFound(user_id) => EduRemindError::NotFound(format!(
            "The participant with id: {}, was not found.",
            user_id
        )),
        UseCaseErrors::StorageError => EduRemindError::InternalError,
    }
}

pub async fn remove_event_participant_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<EduRemindContext>,
) -> Result<HttpResponse, EduRemindError> {
    let usecase = RemoveEventParticipantUseCase {
        event_id: path_params.event_id.clone(),
        user_id: path_params.user_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|event| HttpResponse::Ok().json(APIResponse::new(event)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct RemoveEventParticipantUseCase {
    pub event_id: ID,
    pub user_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseErrors {
    EventNotFound(ID),
    ParticipantNotFound(ID),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for RemoveEventParticipantUseCase {
    type Response = Event;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "RemoveEventParticipant";

    async fn execute(&mut self, ctx: &EduRemindContext) -> Result<Self::Response, Self::Errors> {
        ctx.repos
            .events
            .remove_participant(&self.event_id, &self.user_id)
            .await
            .map_err(|e| match e {
                EventUpdateError::EventNotFound(event_id) => {
                    UseCaseErrors::EventNotFound(event_id)
                }
                EventUpdateError::ParticipantNotFound(user_id) => {
                    UseCaseErrors::ParticipantNotFound(user_id)
                }
                EventUpdateError::Broadcast(_) => UseCaseErrors::StorageError,
            })
    }
}
