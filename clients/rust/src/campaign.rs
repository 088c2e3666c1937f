use crate::{APIResponse, BaseClient, ReminderType, ID};
use edu_remind_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct CampaignClient {
    base: Arc<BaseClient>,
}

pub type ScheduleCampaignInput = schedule_campaign::RequestBody;

impl CampaignClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn get_templates(&self) -> APIResponse<get_message_templates::APIResponse> {
        self.base
            .get("campaigns/templates".into(), StatusCode::OK)
            .await
    }

    pub async fn generate_params(
        &self,
        job_id: ID,
        reminder_type: ReminderType,
    ) -> APIResponse<generate_template_params::APIResponse> {
        let body = generate_template_params::RequestBody {
            job_id,
            reminder_type,
        };
        self.base
            .post(body, "campaigns/params".into(), StatusCode::OK)
            .await
    }

    pub async fn schedule(
        &self,
        input: ScheduleCampaignInput,
    ) -> APIResponse<schedule_campaign::APIResponse> {
        self.base
            .post(input, "campaigns".into(), StatusCode::CREATED)
            .await
    }

    pub async fn get_all(&self) -> APIResponse<get_campaigns::APIResponse> {
        self.base.get("campaigns".into(), StatusCode::OK).await
    }
}
