use crate::dtos::JobDTO;
use chrono::NaiveDate;
use edu_remind_domain::{Job, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobResponse {
    pub job: JobDTO,
}

impl JobResponse {
    pub fn new(job: Job) -> Self {
        Self {
            job: JobDTO::new(job),
        }
    }
}

pub mod get_jobs {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub jobs: Vec<JobDTO>,
    }

    impl APIResponse {
        pub fn new(jobs: Vec<Job>) -> Self {
            Self {
                jobs: jobs.into_iter().map(JobDTO::new).collect(),
            }
        }
    }
}

pub mod create_job {
    use super::*;

    #[derive(Debug, Default, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub title: String,
        pub company: String,
        #[serde(default)]
        pub deadline: Option<NaiveDate>,
        #[serde(default)]
        pub link: Option<String>,
        #[serde(default)]
        pub description: Option<String>,
    }

    pub type APIResponse = JobResponse;
}

pub mod delete_job {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub job_id: ID,
    }

    pub type APIResponse = JobResponse;
}
