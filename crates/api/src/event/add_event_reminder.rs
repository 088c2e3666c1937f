use crate::{
    error::EduRemindError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use edu_remind_api_structs::add_event_reminder::*;
use edu_remind_domain::{Event, ScheduledReminder, ID};
use edu_remind_infra::{EduRemindContext, EventUpdateError};

fn handle_error(e: UseCaseErrors) -> EduRemindError {
    match e {
        UseCaseErrors::NotFound(event_id) => EduRemindError::NotFound(format!(
            "The event with id: {}, was not found.",
            event_id
        )),
        UseCaseErrors::StorageError => EduRemindError::InternalError,
    }
}

pub async fn add_event_reminder_controller(
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<EduRemindContext>,
) -> Result<HttpResponse, EduRemindError> {
    let body = body.0;
    let usecase = AddEventReminderUseCase {
        event_id: path_params.event_id.clone(),
        message: body.message,
        scheduled_at: body.scheduled_at,
        is_admin_reminder: body.is_admin_reminder.unwrap_or(true),
    };

    execute(usecase, &ctx)
        .await
        .map(|event| HttpResponse::Ok().json(APIResponse::new(event)))
        .map_err(handle_error)
}

/// Adds a pending reminder. Without a message the default message of the
/// event is used, without a time it is planned for now.
#[derive(Debug)]
pub struct AddEventReminderUseCase {
    pub event_id: ID,
    pub message: Option<String>,
    pub scheduled_at: Option<i64>,
    pub is_admin_reminder: bool,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for AddEventReminderUseCase {
    type Response = Event;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "AddEventReminder";

    async fn execute(&mut self, ctx: &EduRemindContext) -> Result<Self::Response, Self::Errors> {
        let default_message = ctx
            .repos
            .events
            .find(&self.event_id)
            .await
            .map(|event| event.default_message)
            .ok_or_else(|| UseCaseErrors::NotFound(self.event_id.clone()))?;

        let message = self
            .message
            .take()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(default_message);
        let scheduled_at = self
            .scheduled_at
            .unwrap_or_else(|| ctx.sys.get_timestamp_millis());
        let reminder = ScheduledReminder::new(message, scheduled_at, self.is_admin_reminder);

        let event = ctx
            .repos
            .events
            .add_reminder(&self.event_id, reminder)
            .await
            .map_err(|e| match e {
                EventUpdateError::EventNotFound(event_id) => UseCaseErrors::NotFound(event_id),
                _ => UseCaseErrors::StorageError,
            })?;

        Ok(event)
    }
}
