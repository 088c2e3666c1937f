use crate::dtos::{JobDTO, MessageLogDTO};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatsDTO {
    pub total_students: usize,
    pub reachable_students: usize,
    pub active_jobs: usize,
    pub reminders_sent: usize,
    /// Rounded percentage of delivered messages
    pub delivery_rate: u32,
    pub recent_logs: Vec<MessageLogDTO>,
    pub upcoming_jobs: Vec<JobDTO>,
}
