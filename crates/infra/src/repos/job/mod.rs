mod inmemory;

use edu_remind_domain::{Job, ID};
pub use inmemory::InMemoryJobRepo;

#[async_trait::async_trait]
pub trait IJobRepo: Send + Sync {
    async fn insert(&self, job: &Job) -> anyhow::Result<()>;
    async fn find(&self, job_id: &ID) -> Option<Job>;
    /// All jobs in creation order
    async fn find_all(&self) -> anyhow::Result<Vec<Job>>;
    async fn delete(&self, job_id: &ID) -> Option<Job>;
}
