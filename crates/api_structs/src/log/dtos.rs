use edu_remind_domain::{DeliveryStatus, LogOrigin, MessageLog, ID};
use serde::{Deserialize, Serialize};

/// A message log with its origin flattened into optional fields
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageLogDTO {
    pub id: ID,
    pub event_id: Option<ID>,
    pub event_name: Option<String>,
    pub recipient_name: Option<String>,
    pub student_id: Option<ID>,
    pub student_name: Option<String>,
    pub reminder_id: Option<ID>,
    pub phone: String,
    pub content: String,
    pub status: DeliveryStatus,
    pub sent_at: i64,
    pub template_params: Option<Vec<String>>,
}

impl MessageLogDTO {
    pub fn new(log: MessageLog) -> Self {
        let mut dto = Self {
            id: log.id,
            event_id: None,
            event_name: None,
            recipient_name: None,
            student_id: None,
            student_name: None,
            reminder_id: None,
            phone: log.phone,
            content: log.content,
            status: log.status,
            sent_at: log.sent_at,
            template_params: log.template_params,
        };
        match log.origin {
            LogOrigin::EventBroadcast {
                event_id,
                event_name,
                recipient_name,
            } => {
                dto.event_id = Some(event_id);
                dto.event_name = Some(event_name);
                dto.recipient_name = Some(recipient_name);
            }
            LogOrigin::Campaign {
                student_id,
                student_name,
                reminder_id,
            } => {
                dto.student_id = Some(student_id);
                dto.student_name = Some(student_name);
                dto.reminder_id = Some(reminder_id);
            }
        }
        dto
    }
}
