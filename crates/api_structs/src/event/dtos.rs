use chrono::NaiveDate;
use edu_remind_domain::{
    Event, EventStatus, EventUser, ReminderStatus, ScheduledReminder, ID,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventUserDTO {
    pub id: ID,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
}

impl EventUserDTO {
    pub fn new(user: EventUser) -> Self {
        Self {
            id: user.id,
            name: user.name,
            phone: user.phone,
            email: user.email,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledReminderDTO {
    pub id: ID,
    pub message: String,
    pub scheduled_at: i64,
    pub is_admin_reminder: bool,
    pub status: ReminderStatus,
}

impl ScheduledReminderDTO {
    pub fn new(reminder: ScheduledReminder) -> Self {
        Self {
            id: reminder.id,
            message: reminder.message,
            scheduled_at: reminder.scheduled_at,
            is_admin_reminder: reminder.is_admin_reminder,
            status: reminder.status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDTO {
    pub id: ID,
    pub name: String,
    pub registration_date: NaiveDate,
    pub default_message: String,
    pub participants: Vec<EventUserDTO>,
    pub reminders: Vec<ScheduledReminderDTO>,
    pub status: EventStatus,
}

impl EventDTO {
    pub fn new(event: Event) -> Self {
        Self {
            id: event.id,
            name: event.name,
            registration_date: event.registration_date,
            default_message: event.default_message,
            participants: event
                .participants
                .into_iter()
                .map(EventUserDTO::new)
                .collect(),
            reminders: event
                .reminders
                .into_iter()
                .map(ScheduledReminderDTO::new)
                .collect(),
            status: event.status,
        }
    }
}
