use crate::shared::entity::{Entity, ID};
use crate::shared::search::contains_ignore_case;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryStatus {
    Delivered,
    Failed,
    Queued,
}

/// What caused a message to be sent
#[derive(Debug, Clone, PartialEq)]
pub enum LogOrigin {
    EventBroadcast {
        event_id: ID,
        event_name: String,
        recipient_name: String,
    },
    Campaign {
        student_id: ID,
        student_name: String,
        reminder_id: ID,
    },
}

impl LogOrigin {
    pub fn recipient_name(&self) -> &str {
        match self {
            Self::EventBroadcast { recipient_name, .. } => recipient_name,
            Self::Campaign { student_name, .. } => student_name,
        }
    }

    pub fn event_name(&self) -> Option<&str> {
        match self {
            Self::EventBroadcast { event_name, .. } => Some(event_name),
            Self::Campaign { .. } => None,
        }
    }
}

/// One row of the append only audit trail of sent messages
#[derive(Debug, Clone, PartialEq)]
pub struct MessageLog {
    pub id: ID,
    pub origin: LogOrigin,
    pub phone: String,
    pub content: String,
    pub status: DeliveryStatus,
    pub sent_at: i64,
    /// Positional values the content was rendered with, for campaign messages
    pub template_params: Option<Vec<String>>,
}

impl MessageLog {
    pub fn matches_search(&self, term: &str) -> bool {
        contains_ignore_case(self.origin.recipient_name(), term)
            || self
                .origin
                .event_name()
                .map(|name| contains_ignore_case(name, term))
                .unwrap_or(false)
    }
}

impl Entity for MessageLog {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn log(origin: LogOrigin) -> MessageLog {
        MessageLog {
            id: Default::default(),
            origin,
            phone: "919876543210".into(),
            content: "Hi".into(),
            status: DeliveryStatus::Delivered,
            sent_at: 0,
            template_params: None,
        }
    }

    #[test]
    fn it_searches_recipient_and_event_name() {
        let event_log = log(LogOrigin::EventBroadcast {
            event_id: Default::default(),
            event_name: "Google Internship".into(),
            recipient_name: "Rahul Kumar".into(),
        });
        assert!(event_log.matches_search("rahul"));
        assert!(event_log.matches_search("GOOGLE"));
        assert!(!event_log.matches_search("priya"));

        let campaign_log = log(LogOrigin::Campaign {
            student_id: Default::default(),
            student_name: "Priya Singh".into(),
            reminder_id: Default::default(),
        });
        assert!(campaign_log.matches_search("priya"));
        assert!(!campaign_log.matches_search("google"));
    }
}
