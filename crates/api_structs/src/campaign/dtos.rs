use edu_remind_domain::{MessageTemplate, Reminder, ReminderStatus, ReminderType, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageTemplateDTO {
    pub id: String,
    pub name: String,
    pub body: String,
}

impl MessageTemplateDTO {
    pub fn new(template: &MessageTemplate) -> Self {
        Self {
            id: template.id.to_string(),
            name: template.name.to_string(),
            body: template.body.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignDTO {
    pub id: ID,
    pub job_id: ID,
    #[serde(rename = "type")]
    pub reminder_type: ReminderType,
    pub template_id: String,
    pub scheduled_at: i64,
    pub target_group: Vec<ID>,
    pub status: ReminderStatus,
}

impl CampaignDTO {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            id: reminder.id,
            job_id: reminder.job_id,
            reminder_type: reminder.reminder_type,
            template_id: reminder.template_id,
            scheduled_at: reminder.scheduled_at,
            target_group: reminder.target_group,
            status: reminder.status,
        }
    }
}
