use super::IMessageLogRepo;
use crate::repos::shared::inmemory_repo::*;
use edu_remind_domain::MessageLog;

pub struct InMemoryMessageLogRepo {
    logs: std::sync::Mutex<Vec<MessageLog>>,
}

impl InMemoryMessageLogRepo {
    pub fn new() -> Self {
        Self {
            logs: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IMessageLogRepo for InMemoryMessageLogRepo {
    async fn insert_many(&self, logs: &[MessageLog]) -> anyhow::Result<()> {
        insert_many(logs, &self.logs);
        Ok(())
    }

    async fn find_all(&self) -> anyhow::Result<Vec<MessageLog>> {
        Ok(find_all(&self.logs))
    }
}
