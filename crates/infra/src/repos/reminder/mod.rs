mod inmemory;

use edu_remind_domain::{Reminder, ReminderStatus};
pub use inmemory::InMemoryReminderRepo;

#[async_trait::async_trait]
pub trait IReminderRepo: Send + Sync {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()>;
    /// All campaigns in creation order
    async fn find_all(&self) -> anyhow::Result<Vec<Reminder>>;
    async fn count_by_status(&self, status: ReminderStatus) -> anyhow::Result<usize>;
}

#[cfg(test)]
mod tests {
    use crate::EduRemindContext;
    use edu_remind_domain::{Reminder, ReminderStatus, ReminderType};

    #[tokio::test]
    async fn insert_and_count() {
        let ctx = EduRemindContext::create_inmemory();
        let reminder = Reminder::new_sent(
            Default::default(),
            ReminderType::Deadline,
            "deadline_alert_v2".into(),
            0,
            vec![Default::default()],
        );

        assert!(ctx.repos.reminders.insert(&reminder).await.is_ok());
        assert_eq!(ctx.repos.reminders.find_all().await.unwrap(), vec![reminder]);
        assert_eq!(
            ctx.repos
                .reminders
                .count_by_status(ReminderStatus::Sent)
                .await
                .unwrap(),
            1
        );
        assert_eq!(
            ctx.repos
                .reminders
                .count_by_status(ReminderStatus::Pending)
                .await
                .unwrap(),
            0
        );
    }
}
