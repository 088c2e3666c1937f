use super::IReminderRepo;
use crate::repos::shared::inmemory_repo::*;
use edu_remind_domain::{Reminder, ReminderStatus};

pub struct InMemoryReminderRepo {
    reminders: std::sync::Mutex<Vec<Reminder>>,
}

impl InMemoryReminderRepo {
    pub fn new() -> Self {
        Self {
            reminders: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IReminderRepo for InMemoryReminderRepo {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()> {
        insert(reminder, &self.reminders);
        Ok(())
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Reminder>> {
        Ok(find_all(&self.reminders))
    }

    async fn count_by_status(&self, status: ReminderStatus) -> anyhow::Result<usize> {
        Ok(find_by(&self.reminders, |r| r.status == status).len())
    }
}
