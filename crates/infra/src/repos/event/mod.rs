mod inmemory;

use edu_remind_domain::{BroadcastError, Event, EventUser, ScheduledReminder, ID};
pub use inmemory::InMemoryEventRepo;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum EventUpdateError {
    #[error("The event with id: {0}, was not found.")]
    EventNotFound(ID),
    #[error("The participant with id: {0}, was not found.")]
    ParticipantNotFound(ID),
    #[error(transparent)]
    Broadcast(#[from] BroadcastError),
}

/// Every change is applied to the stored event while it is locked, so
/// concurrent changes to the same event never overwrite each other. Each
/// change returns the updated event.
#[async_trait::async_trait]
pub trait IEventRepo: Send + Sync {
    async fn insert(&self, e: &Event) -> anyhow::Result<()>;
    async fn find(&self, event_id: &ID) -> Option<Event>;
    async fn add_participant(
        &self,
        event_id: &ID,
        participant: EventUser,
    ) -> Result<Event, EventUpdateError>;
    async fn remove_participant(
        &self,
        event_id: &ID,
        participant_id: &ID,
    ) -> Result<Event, EventUpdateError>;
    async fn add_reminder(
        &self,
        event_id: &ID,
        reminder: ScheduledReminder,
    ) -> Result<Event, EventUpdateError>;
    /// Claims a pending reminder. Only one caller can ever succeed for a
    /// given reminder.
    async fn mark_reminder_sent(
        &self,
        event_id: &ID,
        reminder_id: &ID,
    ) -> Result<Event, EventUpdateError>;
    /// All events in creation order
    async fn find_all(&self) -> anyhow::Result<Vec<Event>>;
    async fn delete(&self, event_id: &ID) -> Option<Event>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EduRemindContext;
    use chrono::NaiveDate;
    use edu_remind_domain::ReminderStatus;

    fn event(name: &str) -> Event {
        Event::new(name.into(), NaiveDate::from_ymd_opt(2024, 12, 15).unwrap(), None)
    }

    #[tokio::test]
    async fn create_and_delete() {
        let ctx = EduRemindContext::create_inmemory();
        let event = event("Google Internship 2025");

        assert!(ctx.repos.events.insert(&event).await.is_ok());
        assert_eq!(ctx.repos.events.find(&event.id).await, Some(event.clone()));

        assert_eq!(ctx.repos.events.delete(&event.id).await, Some(event.clone()));
        assert!(ctx.repos.events.find(&event.id).await.is_none());
    }

    #[tokio::test]
    async fn participants() {
        let ctx = EduRemindContext::create_inmemory();
        let event = event("Amazon Drive");
        ctx.repos.events.insert(&event).await.unwrap();

        let rahul = EventUser::new("Rahul".into(), "919876543210".into(), None);
        let asha = EventUser::new("Asha".into(), "919123456789".into(), None);
        ctx.repos
            .events
            .add_participant(&event.id, rahul.clone())
            .await
            .unwrap();
        let updated = ctx
            .repos
            .events
            .add_participant(&event.id, asha.clone())
            .await
            .unwrap();
        assert_eq!(updated.participants, vec![rahul.clone(), asha.clone()]);

        let updated = ctx
            .repos
            .events
            .remove_participant(&event.id, &rahul.id)
            .await
            .unwrap();
        assert_eq!(updated.participants, vec![asha]);
        assert_eq!(
            ctx.repos.events.remove_participant(&event.id, &rahul.id).await,
            Err(EventUpdateError::ParticipantNotFound(rahul.id.clone()))
        );

        let unknown = ID::default();
        assert_eq!(
            ctx.repos.events.add_participant(&unknown, rahul).await,
            Err(EventUpdateError::EventNotFound(unknown))
        );
    }

    #[tokio::test]
    async fn reminder_is_claimed_once() {
        let ctx = EduRemindContext::create_inmemory();
        let event = event("Amazon Drive");
        ctx.repos.events.insert(&event).await.unwrap();
        let reminder = ScheduledReminder::new("Hi {name}".into(), 0, false);
        ctx.repos
            .events
            .add_reminder(&event.id, reminder.clone())
            .await
            .unwrap();

        let claimed = ctx
            .repos
            .events
            .mark_reminder_sent(&event.id, &reminder.id)
            .await
            .unwrap();
        assert_eq!(claimed.reminders[0].status, ReminderStatus::Sent);
        assert_eq!(
            ctx.repos.events.mark_reminder_sent(&event.id, &reminder.id).await,
            Err(EventUpdateError::Broadcast(BroadcastError::AlreadySent(
                reminder.id.clone()
            )))
        );
        assert_eq!(
            ctx.repos.events.find(&event.id).await.unwrap().reminders[0].status,
            ReminderStatus::Sent
        );
    }

    #[tokio::test]
    async fn find_all_keeps_creation_order() {
        let ctx = EduRemindContext::create_inmemory();
        for name in ["A", "B", "C"] {
            ctx.repos.events.insert(&event(name)).await.unwrap();
        }
        let names = ctx
            .repos
            .events
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["A", "B", "C"]);
    }
}
