use crate::dtos::{CampaignDTO, MessageTemplateDTO};
use edu_remind_domain::{MessageTemplate, Reminder, ReminderType, ID};
use serde::{Deserialize, Serialize};

pub mod get_message_templates {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub templates: Vec<MessageTemplateDTO>,
    }

    impl APIResponse {
        pub fn new(templates: &[MessageTemplate]) -> Self {
            Self {
                templates: templates.iter().map(MessageTemplateDTO::new).collect(),
            }
        }
    }
}

pub mod generate_template_params {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub job_id: ID,
        pub reminder_type: ReminderType,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub params: Vec<String>,
        /// True when the parameters are the plain job values because
        /// generation failed
        pub is_fallback: bool,
    }
}

pub mod schedule_campaign {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub job_id: ID,
        pub reminder_type: ReminderType,
        pub template_id: String,
        /// Defaults to now
        #[serde(default)]
        pub scheduled_at: Option<i64>,
        /// Defaults to every reachable student
        #[serde(default)]
        pub target_group: Option<Vec<ID>>,
        /// Template parameters, generated when missing
        #[serde(default)]
        pub params: Option<Vec<String>>,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub campaign: CampaignDTO,
        pub messages_queued: usize,
    }

    impl APIResponse {
        pub fn new(campaign: Reminder, messages_queued: usize) -> Self {
            Self {
                campaign: CampaignDTO::new(campaign),
                messages_queued,
            }
        }
    }
}

pub mod get_campaigns {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub campaigns: Vec<CampaignDTO>,
    }

    impl APIResponse {
        pub fn new(campaigns: Vec<Reminder>) -> Self {
            Self {
                campaigns: campaigns.into_iter().map(CampaignDTO::new).collect(),
            }
        }
    }
}
