mod event;
mod import_preview;
mod job;
mod kv;
mod message_log;
mod reminder;
mod shared;
mod student;

pub use event::{EventUpdateError, IEventRepo};
use event::InMemoryEventRepo;
pub use import_preview::IImportPreviewRepo;
use import_preview::InMemoryImportPreviewRepo;
pub use job::IJobRepo;
use job::InMemoryJobRepo;
pub use kv::{IKVRepo, KeyValue};
use kv::InMemoryKVRepo;
pub use message_log::IMessageLogRepo;
use message_log::InMemoryMessageLogRepo;
pub use reminder::IReminderRepo;
use reminder::InMemoryReminderRepo;
use std::sync::Arc;
pub use student::IStudentRepo;
use student::InMemoryStudentRepo;

#[derive(Clone)]
pub struct Repos {
    pub students: Arc<dyn IStudentRepo>,
    pub import_preview: Arc<dyn IImportPreviewRepo>,
    pub events: Arc<dyn IEventRepo>,
    pub jobs: Arc<dyn IJobRepo>,
    pub reminders: Arc<dyn IReminderRepo>,
    pub message_logs: Arc<dyn IMessageLogRepo>,
    pub settings: Arc<dyn IKVRepo>,
}

impl Repos {
    pub fn create_inmemory() -> Self {
        Self {
            students: Arc::new(InMemoryStudentRepo::new()),
            import_preview: Arc::new(InMemoryImportPreviewRepo::new()),
            events: Arc::new(InMemoryEventRepo::new()),
            jobs: Arc::new(InMemoryJobRepo::new()),
            reminders: Arc::new(InMemoryReminderRepo::new()),
            message_logs: Arc::new(InMemoryMessageLogRepo::new()),
            settings: Arc::new(InMemoryKVRepo::new()),
        }
    }
}
