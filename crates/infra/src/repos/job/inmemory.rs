use super::IJobRepo;
use crate::repos::shared::inmemory_repo::*;
use edu_remind_domain::{Job, ID};

pub struct InMemoryJobRepo {
    jobs: std::sync::Mutex<Vec<Job>>,
}

impl InMemoryJobRepo {
    pub fn new() -> Self {
        Self {
            jobs: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IJobRepo for InMemoryJobRepo {
    async fn insert(&self, job: &Job) -> anyhow::Result<()> {
        insert(job, &self.jobs);
        Ok(())
    }

    async fn find(&self, job_id: &ID) -> Option<Job> {
        find(job_id, &self.jobs)
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Job>> {
        Ok(find_all(&self.jobs))
    }

    async fn delete(&self, job_id: &ID) -> Option<Job> {
        delete(job_id, &self.jobs)
    }
}
