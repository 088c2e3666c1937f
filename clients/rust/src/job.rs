use crate::{APIResponse, BaseClient, ID};
use edu_remind_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct JobClient {
    base: Arc<BaseClient>,
}

pub type CreateJobInput = create_job::RequestBody;

impl JobClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn get_all(&self) -> APIResponse<get_jobs::APIResponse> {
        self.base.get("jobs".into(), StatusCode::OK).await
    }

    pub async fn create(&self, input: CreateJobInput) -> APIResponse<create_job::APIResponse> {
        self.base
            .post(input, "jobs".into(), StatusCode::CREATED)
            .await
    }

    pub async fn delete(&self, job_id: ID) -> APIResponse<delete_job::APIResponse> {
        self.base
            .delete(format!("jobs/{}", job_id), StatusCode::OK)
            .await
    }
}
