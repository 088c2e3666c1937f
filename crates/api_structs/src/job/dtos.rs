use chrono::NaiveDate;
use edu_remind_domain::{Job, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDTO {
    pub id: ID,
    pub title: String,
    pub company: String,
    pub deadline: Option<NaiveDate>,
    pub link: String,
    pub description: String,
}

impl JobDTO {
    pub fn new(job: Job) -> Self {
        Self {
            id: job.id,
            title: job.title,
            company: job.company,
            deadline: job.deadline,
            link: job.link,
            description: job.description,
        }
    }
}
