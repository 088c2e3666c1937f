use crate::{
    error::EduRemindError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use edu_remind_api_structs::add_event_participant::*;
use edu_remind_domain::{Event, EventUser, ID};
use edu_remind_infra::{EduRemindContext, EventUpdateError};

fn handle_error(e: UseCaseErrors) -> EduRemindError {
    match e {
        UseCaseErrors::NotFound(event_id) => EduRemindError::NotFound(format!(
            "The event with id: {}, was not found.",
            event_id
        )),
        UseCaseErrors::MissingNameOrPhone => {
            EduRemindError::BadClientData("A participant needs both a name and a phone".into())
        }
        UseCaseErrors::StorageError => EduRemindError::InternalError,
    }
}

pub async fn add_event_participant_controller(
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<EduRemindContext>,
) -> Result<HttpResponse, EduRemindError> {
    let body = body.0;
    let usecase = AddEventParticipantUseCase {
        event_id: path_params.event_id.clone(),
        name: body.name,
        phone: body.phone,
        email: body.email,
    };

    execute(usecase, &ctx)
        .await
        .map(|event| HttpResponse::Ok().json(APIResponse::new(event)))
        .map_err(handle_error)
}

/// Registers a participant for an event. The phone is stored as typed,
/// participants are not part of the student registry.
#[derive(Debug)]
pub struct AddEventParticipantUseCase {
    pub event_id: ID,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseErrors {
    NotFound(ID),
    MissingNameOrPhone,
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for AddEventParticipantUseCase {
    type Response = Event;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "AddEventParticipant";

    async fn execute(&mut self, ctx: &EduRemindContext) -> Result<Self::Response, Self::Errors> {
        let name = self.name.trim();
        let phone = self.phone.trim();
        if name.is_empty() || phone.is_empty() {
            return Err(UseCaseErrors::MissingNameOrPhone);
        }

        let email = self
            .email
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .map(String::from);
        let participant = EventUser::new(name.to_string(), phone.to_string(), email);

        let event = ctx
            .repos
            .events
            .add_participant(&self.event_id, participant)
            .await
            .map_err(|e| match e {
                EventUpdateError::EventNotFound(event_id) => UseCaseErrors::NotFound(event_id),
                _ => UseCaseErrors::StorageError,
            })?;

        Ok(event)
    }
}
