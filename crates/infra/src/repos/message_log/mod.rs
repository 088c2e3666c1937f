mod inmemory;

use edu_remind_domain::MessageLog;
pub use inmemory::InMemoryMessageLogRepo;

/// The message log is append only
#[async_trait::async_trait]
pub trait IMessageLogRepo: Send + Sync {
    async fn insert_many(&self, logs: &[MessageLog]) -> anyhow::Result<()>;
    /// All logs in the order they were written
    async fn find_all(&self) -> anyhow::Result<Vec<MessageLog>>;
}

#[cfg(test)]
mod tests {
    use crate::EduRemindContext;
    use edu_remind_domain::{DeliveryStatus, LogOrigin, MessageLog};

    fn log(recipient: &str) -> MessageLog {
        MessageLog {
            id: Default::default(),
            origin: LogOrigin::EventBroadcast {
                event_id: Default::default(),
                event_name: "Drive".into(),
                recipient_name: recipient.into(),
            },
            phone: "919876543210".into(),
            content: "Hi".into(),
            status: DeliveryStatus::Delivered,
            sent_at: 0,
            template_params: None,
        }
    }

    #[tokio::test]
    async fn appends_logs() {
        let ctx = EduRemindContext::create_inmemory();
        let first = vec![log("A"), log("B")];
        let second = vec![log("C")];
        ctx.repos.message_logs.insert_many(&first).await.unwrap();
        ctx.repos.message_logs.insert_many(&second).await.unwrap();

        let logs = ctx.repos.message_logs.find_all().await.unwrap();
        assert_eq!(logs.len(), 3);
        assert_eq!(logs[0], first[0]);
        assert_eq!(logs[2], second[0]);
    }
}
