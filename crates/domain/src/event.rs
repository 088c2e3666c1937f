use crate::shared::entity::{Entity, ID};
use crate::shared::search::contains_ignore_case;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_EVENT_MESSAGE: &str = "Hi {name}, don't forget to register for {event_name}!";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventStatus {
    Active,
    Archived,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReminderStatus {
    Pending,
    Sent,
}

/// A registrant of an `Event`. This is an event scoped copy of the identity
/// and is not linked to the student registry.
#[derive(Debug, Clone, PartialEq)]
pub struct EventUser {
    pub id: ID,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
}

impl EventUser {
    pub fn new(name: String, phone: String, email: Option<String>) -> Self {
        Self {
            id: Default::default(),
            name,
            phone,
            email,
        }
    }
}

/// A message that is broadcast to every participant of an `Event`.
/// It moves from `Pending` to `Sent` exactly once.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledReminder {
    pub id: ID,
    pub message: String,
    /// Timestamp in millis the operator planned the broadcast for
    pub scheduled_at: i64,
    pub is_admin_reminder: bool,
    pub status: ReminderStatus,
}

impl ScheduledReminder {
    pub fn new(message: String, scheduled_at: i64, is_admin_reminder: bool) -> Self {
        Self {
            id: Default::default(),
            message,
            scheduled_at,
            is_admin_reminder,
            status: ReminderStatus::Pending,
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum BroadcastError {
    #[error("The reminder with id: {0}, was not found")]
    ReminderNotFound(ID),
    #[error("The reminder with id: {0}, has already been sent")]
    AlreadySent(ID),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: ID,
    pub name: String,
    pub registration_date: NaiveDate,
    /// Named template (`{name}`, `{event_name}`) new reminders start from
    pub default_message: String,
    pub participants: Vec<EventUser>,
    pub reminders: Vec<ScheduledReminder>,
    pub status: EventStatus,
}

impl Event {
    pub fn new(name: String, registration_date: NaiveDate, default_message: Option<String>) -> Self {
        Self {
            id: Default::default(),
            name,
            registration_date,
            default_message: default_message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_EVENT_MESSAGE.to_string()),
            participants: Vec::new(),
            reminders: Vec::new(),
            status: EventStatus::Active,
        }
    }

    pub fn add_participant(&mut self, participant: EventUser) {
        self.participants.push(participant);
    }

    /// Returns the removed participant if it was registered
    pub fn remove_participant(&mut self, participant_id: &ID) -> Option<EventUser> {
        let index = self
            .participants
            .iter()
            .position(|p| p.id == *participant_id)?;
        Some(self.participants.remove(index))
    }

    pub fn add_reminder(&mut self, reminder: ScheduledReminder) {
        self.reminders.push(reminder);
    }

    pub fn find_reminder(&self, reminder_id: &ID) -> Option<&ScheduledReminder> {
        self.reminders.iter().find(|r| r.id == *reminder_id)
    }

    /// Transitions a pending reminder to `Sent`. A sent reminder can not be
    /// sent again.
    pub fn mark_reminder_sent(&mut self, reminder_id: &ID) -> Result<(), BroadcastError> {
        let reminder = self
            .reminders
            .iter_mut()
            .find(|r| r.id == *reminder_id)
            .ok_or_else(|| BroadcastError::ReminderNotFound(reminder_id.clone()))?;
        if reminder.status == ReminderStatus::Sent {
            return Err(BroadcastError::AlreadySent(reminder_id.clone()));
        }
        reminder.status = ReminderStatus::Sent;
        Ok(())
    }

    pub fn matches_search(&self, term: &str) -> bool {
        contains_ignore_case(&self.name, term)
    }
}

impl Entity for Event {
    fn id(&self) -> &ID {
        &self.id
    }
}
