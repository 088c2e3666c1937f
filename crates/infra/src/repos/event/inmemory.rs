use super::{EventUpdateError, IEventRepo};
use crate::repos::shared::inmemory_repo::*;
use edu_remind_domain::{Event, EventUser, ScheduledReminder, ID};

pub struct InMemoryEventRepo {
    events: std::sync::Mutex<Vec<Event>>,
}

impl InMemoryEventRepo {
    pub fn new() -> Self {
        Self {
            events: std::sync::Mutex::new(Vec::new()),
        }
    }

    /// Runs `change` on the stored event while the collection is locked
    fn apply<F>(&self, event_id: &ID, change: F) -> Result<Event, EventUpdateError>
    where
        F: FnOnce(&mut Event) -> Result<(), EventUpdateError>,
    {
        let mut outcome = Ok(());
        let event = update(event_id, &self.events, |event| outcome = change(event))
            .ok_or_else(|| EventUpdateError::EventNotFound(event_id.clone()))?;
        outcome.map(|_| event)
    }
}

#[async_trait::async_trait]
impl IEventRepo for InMemoryEventRepo {
    async fn insert(&self, e: &Event) -> anyhow::Result<()> {
        insert(e, &self.events);
        Ok(())
    }

    async fn find(&self, event_id: &ID) -> Option<Event> {
        find(event_id, &self.events)
    }

    async fn add_participant(
        &self,
        event_id: &ID,
        participant: EventUser,
    ) -> Result<Event, EventUpdateError> {
        self.apply(event_id, |event| {
            event.add_participant(participant);
            Ok(())
        })
    }

    async fn remove_participant(
        &self,
        event_id: &ID,
        participant_id: &ID,
    ) -> Result<Event, EventUpdateError> {
        self.apply(event_id, |event| {
            event
                .remove_participant(participant_id)
                .map(|_| ())
                .ok_or_else(|| EventUpdateError::ParticipantNotFound(participant_id.clone()))
        })
    }

    async fn add_reminder(
        &self,
        event_id: &ID,
        reminder: ScheduledReminder,
    ) -> Result<Event, EventUpdateError> {
        self.apply(event_id, |event| {
            event.add_reminder(reminder);
            Ok(())
        })
    }

    async fn mark_reminder_sent(
        &self,
        event_id: &ID,
        reminder_id: &ID,
    ) -> Result<Event, EventUpdateError> {
        self.apply(event_id, |event| {
            event.mark_reminder_sent(reminder_id)?;
            Ok(())
        })
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Event>> {
        Ok(find_all(&self.events))
    }

    async fn delete(&self, event_id: &ID) -> Option<Event> {
        delete(event_id, &self.events)
    }
}
