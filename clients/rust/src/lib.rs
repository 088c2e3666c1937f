mod base;
mod campaign;
mod dashboard;
mod event;
mod import;
mod job;
mod log;
mod settings;
mod status;
mod student;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIErrorVariant, APIResponse};
use campaign::CampaignClient;
pub use campaign::ScheduleCampaignInput;
use dashboard::DashboardClient;
pub use edu_remind_api_structs::dtos::*;
pub use edu_remind_domain::{DeliveryStatus, EventStatus, ReminderStatus, ReminderType, ID};
use event::EventClient;
pub use event::{AddParticipantInput, AddReminderInput, CreateEventInput};
use import::ImportClient;
use job::JobClient;
pub use job::CreateJobInput;
use log::LogClient;
use settings::SettingsClient;
pub use settings::ApiConfigInput;
use status::StatusClient;
use std::sync::Arc;
use student::StudentClient;
pub use student::CreateStudentInput;

// Domain
pub use edu_remind_api_structs::dtos::CampaignDTO as Campaign;
pub use edu_remind_api_structs::dtos::EventDTO as Event;
pub use edu_remind_api_structs::dtos::JobDTO as Job;
pub use edu_remind_api_structs::dtos::MessageLogDTO as MessageLog;
pub use edu_remind_api_structs::dtos::StudentDTO as Student;

/// EduRemind Server SDK
///
/// The SDK contains methods for interacting with the EduRemind server API.
#[derive(Clone)]
pub struct EduRemindSDK {
    pub campaign: CampaignClient,
    pub dashboard: DashboardClient,
    pub event: EventClient,
    pub import: ImportClient,
    pub job: JobClient,
    pub log: LogClient,
    pub settings: SettingsClient,
    pub status: StatusClient,
    pub student: StudentClient,
}

impl EduRemindSDK {
    pub fn new(address: String) -> Self {
        let base = Arc::new(BaseClient::new(address));

        Self {
            campaign: CampaignClient::new(base.clone()),
            dashboard: DashboardClient::new(base.clone()),
            event: EventClient::new(base.clone()),
            import: ImportClient::new(base.clone()),
            job: JobClient::new(base.clone()),
            log: LogClient::new(base.clone()),
            settings: SettingsClient::new(base.clone()),
            status: StatusClient::new(base.clone()),
            student: StudentClient::new(base),
        }
    }
}
