use crate::{
    error::EduRemindError,
    shared::{
        dispatch::dispatch_all,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpResponse};
use edu_remind_api_structs::broadcast_event_reminder::*;
use edu_remind_domain::{event_broadcast_messages, BroadcastError, Event, ID};
use edu_remind_infra::{EduRemindContext, EventUpdateError};
use tracing::info;

fn handle_error(e: UseCaseErrors) -> EduRemindError {
    match e {
        UseCaseErrors::EventNotFound(event_id) => EduRemindError::NotFound(format!(
            "The event with id: {}, was not found.",
            event_id
        )),
        UseCaseErrors::Broadcast(e @ BroadcastError::ReminderNotFound(_)) => {
            EduRemindError::NotFound(e.to_string())
        }
        UseCaseErrors::Broadcast(e @ BroadcastError::AlreadySent(_)) => {
            EduRemindError::Conflict(e.to_string())
        }
        UseCaseErrors::StorageError => EduRemindError::InternalError,
    }
}

pub async fn broadcast_event_reminder_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<EduRemindContext>,
) -> Result<HttpResponse, EduRemindError> {
    let usecase = BroadcastEventReminderUseCase {
        event_id: path_params.event_id.clone(),
        reminder_id: path_params.reminder_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Ok().json(APIResponse::new(res.event, res.messages_sent)))
        .map_err(handle_error)
}

/// Marks a pending reminder as sent, then sends it to every participant
/// registered at that moment and writes one message log per participant.
/// The reminder is claimed before anything is sent, so it goes out at most once.
#[derive(Debug)]
pub struct BroadcastEventReminderUseCase {
    pub event_id: ID,
    pub reminder_id: ID,
}

#[derive(Debug)]
pub struct UseCaseResponse {
    pub event: Event,
    pub messages_sent: usize,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseErrors {
    EventNotFound(ID),
    Broadcast(BroadcastError),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for BroadcastEventReminderUseCase {
    type Response = UseCaseResponse;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "BroadcastEventReminder";

    async fn execute(&mut self, ctx: &EduRemindContext) -> Result<Self::Response, Self::Errors> {
        let event = ctx
            .repos
            .events
            .mark_reminder_sent(&self.event_id, &self.reminder_id)
            .await
            .map_err(|e| match e {
                EventUpdateError::EventNotFound(event_id) => UseCaseErrors::EventNotFound(event_id),
                EventUpdateError::Broadcast(e) => UseCaseErrors::Broadcast(e),
                EventUpdateError::ParticipantNotFound(_) => UseCaseErrors::StorageError,
            })?;
        let reminder = event
            .find_reminder(&self.reminder_id)
            .cloned()
            .ok_or_else(|| {
                UseCaseErrors::Broadcast(BroadcastError::ReminderNotFound(self.reminder_id.clone()))
            })?;

        let logs = dispatch_all(event_broadcast_messages(&event, &reminder), ctx).await;
        ctx.repos
            .message_logs
            .insert_many(&logs)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        info!(
            "Broadcast reminder {} of event {} to {} participants",
            reminder.id,
            event.id,
            logs.len()
        );

        Ok(UseCaseResponse {
            event,
            messages_sent: logs.len(),
        })
    }
}
