use crate::{APIResponse, BaseClient, ID};
use edu_remind_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct EventClient {
    base: Arc<BaseClient>,
}

pub type CreateEventInput = create_event::RequestBody;

pub struct AddParticipantInput {
    pub event_id: ID,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
}

pub struct AddReminderInput {
    pub event_id: ID,
    /// The event's default message when missing
    pub message: Option<String>,
    pub scheduled_at: Option<i64>,
    pub is_admin_reminder: Option<bool>,
}

impl EventClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn get_all(&self, search: Option<&str>) -> APIResponse<get_events::APIResponse> {
        let query = get_events::QueryParams {
            search: search.map(String::from),
        };
        self.base
            .get_with_query("events".into(), &query, StatusCode::OK)
            .await
    }

    pub async fn create(&self, input: CreateEventInput) -> APIResponse<create_event::APIResponse> {
        self.base
            .post(input, "events".into(), StatusCode::CREATED)
            .await
    }

    pub async fn get(&self, event_id: ID) -> APIResponse<get_event::APIResponse> {
        self.base
            .get(format!("events/{}", event_id), StatusCode::OK)
            .await
    }

    pub async fn delete(&self, event_id: ID) -> APIResponse<delete_event::APIResponse> {
        self.base
            .delete(format!("events/{}", event_id), StatusCode::OK)
            .await
    }

    pub async fn add_participant(
        &self,
        input: AddParticipantInput,
    ) -> APIResponse<add_event_participant::APIResponse> {
        let body = add_event_participant::RequestBody {
            name: input.name,
            phone: input.phone,
            email: input.email,
        };
        self.base
            .post(
                body,
                format!("events/{}/participants", input.event_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn remove_participant(
        &self,
        event_id: ID,
        user_id: ID,
    ) -> APIResponse<remove_event_participant::APIResponse> {
        self.base
            .delete(
                format!("events/{}/participants/{}", event_id, user_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn add_reminder(
        &self,
        input: AddReminderInput,
    ) -> APIResponse<add_event_reminder::APIResponse> {
        let body = add_event_reminder::RequestBody {
            message: input.message,
            scheduled_at: input.scheduled_at,
            is_admin_reminder: input.is_admin_reminder,
        };
        self.base
            .post(
                body,
                format!("events/{}/reminders", input.event_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn broadcast_reminder(
        &self,
        event_id: ID,
        reminder_id: ID,
    ) -> APIResponse<broadcast_event_reminder::APIResponse> {
        self.base
            .post(
                (),
                format!("events/{}/reminders/{}/broadcast", event_id, reminder_id),
                StatusCode::OK,
            )
            .await
    }
}
