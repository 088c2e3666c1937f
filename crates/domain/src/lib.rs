mod broadcast;
mod event;
pub mod import;
mod job;
mod message_log;
mod phone;
mod reminder;
mod settings;
mod shared;
mod student;
mod template;

pub use broadcast::{
    campaign_messages, campaign_values, event_broadcast_messages, fallback_template_params,
    OutgoingMessage, PLACEHOLDER_STUDENT_NAME, TEMPLATE_PARAM_COUNT,
};
pub use event::{
    BroadcastError, Event, EventStatus, EventUser, ReminderStatus, ScheduledReminder,
    DEFAULT_EVENT_MESSAGE,
};
pub use import::{ImportError, ImportPreview, PreviewSummary, Row};
pub use job::Job;
pub use message_log::{DeliveryStatus, LogOrigin, MessageLog};
pub use phone::{is_valid_phone, normalize_phone, DEFAULT_COUNTRY_CODE};
pub use reminder::{Reminder, ReminderType};
pub use settings::{AdminCredentials, ApiConfig, ADMIN_CREDENTIALS_KEY, API_CONFIG_KEY};
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use shared::search::contains_ignore_case;
pub use student::{Student, StudentFields};
pub use template::{render_named, render_positional, MessageTemplate, NamedParams, MESSAGE_TEMPLATES};
