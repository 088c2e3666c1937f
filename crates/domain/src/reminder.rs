use crate::event::ReminderStatus;
use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReminderType {
    NewJob,
    Deadline,
    Interview,
}

impl ReminderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NewJob => "NEW_JOB",
            Self::Deadline => "DEADLINE",
            Self::Interview => "INTERVIEW",
        }
    }
}

/// A `Reminder` is a templated campaign about a `Job` sent to a group of
/// students. Scheduling a campaign dispatches it right away, so it is
/// stored as `Sent`.
#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    pub id: ID,
    /// The `Job` this campaign is about. The job may since have been deleted.
    pub job_id: ID,
    pub reminder_type: ReminderType,
    /// Id of the `MessageTemplate` the messages are rendered with
    pub template_id: String,
    pub scheduled_at: i64,
    /// Ids of the targeted `Student`s
    pub target_group: Vec<ID>,
    pub status: ReminderStatus,
}

impl Reminder {
    pub fn new_sent(
        job_id: ID,
        reminder_type: ReminderType,
        template_id: String,
        scheduled_at: i64,
        target_group: Vec<ID>,
    ) -> Self {
        Self {
            id: Default::default(),
            job_id,
            reminder_type,
            template_id,
            scheduled_at,
            target_group,
            status: ReminderStatus::Sent,
        }
    }

    pub fn targets(&self, student_id: &ID) -> bool {
        self.target_group.contains(student_id)
    }
}

impl Entity for Reminder {
    fn id(&self) -> &ID {
        &self.id
    }
}
