use crate::event::{Event, ScheduledReminder};
use crate::job::Job;
use crate::message_log::{DeliveryStatus, LogOrigin, MessageLog};
use crate::reminder::Reminder;
use crate::student::Student;
use crate::template::{render_named, MessageTemplate, NamedParams};

/// Name slot used for generated parameters when there is no sample student
pub const PLACEHOLDER_STUDENT_NAME: &str = "[Student Name]";

/// Number of positional values a campaign template is rendered with
pub const TEMPLATE_PARAM_COUNT: usize = 5;

/// A rendered message ready to be handed to a dispatcher
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingMessage {
    pub origin: LogOrigin,
    pub phone: String,
    pub content: String,
    pub template_params: Option<Vec<String>>,
}

impl OutgoingMessage {
    pub fn into_log(self, status: DeliveryStatus, sent_at: i64) -> MessageLog {
        MessageLog {
            id: Default::default(),
            origin: self.origin,
            phone: self.phone,
            content: self.content,
            status,
            sent_at,
            template_params: self.template_params,
        }
    }
}

/// One message per participant of the `Event`, in registration order
pub fn event_broadcast_messages(
    event: &Event,
    reminder: &ScheduledReminder,
) -> Vec<OutgoingMessage> {
    event
        .participants
        .iter()
        .map(|participant| OutgoingMessage {
            origin: LogOrigin::EventBroadcast {
                event_id: event.id.clone(),
                event_name: event.name.clone(),
                recipient_name: participant.name.clone(),
            },
            phone: participant.phone.clone(),
            content: render_named(
                &reminder.message,
                &NamedParams {
                    name: &participant.name,
                    event_name: &event.name,
                },
            ),
            template_params: None,
        })
        .collect()
}

/// The values a student is messaged with: the student's own name followed by
/// the 2nd to 5th campaign parameter. Missing parameters become empty.
pub fn campaign_values(student_name: &str, params: &[String]) -> Vec<String> {
    std::iter::once(student_name.to_string())
        .chain(
            (1..TEMPLATE_PARAM_COUNT).map(|i| params.get(i).cloned().unwrap_or_default()),
        )
        .collect()
}

/// One message per registry student targeted by the campaign, in registry
/// order. Target ids without a student are skipped.
pub fn campaign_messages(
    reminder: &Reminder,
    template: &MessageTemplate,
    params: &[String],
    students: &[Student],
) -> Vec<OutgoingMessage> {
    students
        .iter()
        .filter(|s| reminder.targets(&s.id))
        .map(|student| {
            let values = campaign_values(&student.name, params);
            OutgoingMessage {
                origin: LogOrigin::Campaign {
                    student_id: student.id.clone(),
                    student_name: student.name.clone(),
                    reminder_id: reminder.id.clone(),
                },
                phone: student.phone.clone(),
                content: template.render(&values),
                template_params: Some(values),
            }
        })
        .collect()
}

/// Parameters used when they can not be generated
pub fn fallback_template_params(job: &Job, student: Option<&Student>) -> Vec<String> {
    vec![
        student
            .map(|s| s.name.clone())
            .unwrap_or_else(|| PLACEHOLDER_STUDENT_NAME.to_string()),
        job.title.clone(),
        job.company.clone(),
        job.deadline_text(),
        job.link.clone(),
    ]
}
