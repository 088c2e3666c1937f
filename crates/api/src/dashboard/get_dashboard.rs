use crate::{
    error::EduRemindError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use edu_remind_api_structs::{
    dtos::{DashboardStatsDTO, JobDTO, MessageLogDTO},
    get_dashboard::*,
};
use edu_remind_domain::{DeliveryStatus, Job, MessageLog, ReminderStatus};
use edu_remind_infra::EduRemindContext;

const RECENT_LOGS: usize = 5;
const UPCOMING_JOBS: usize = 3;

pub async fn get_dashboard_controller(
    ctx: web::Data<EduRemindContext>,
) -> Result<HttpResponse, EduRemindError> {
    execute(GetDashboardUseCase, &ctx)
        .await
        .map(|stats| {
            HttpResponse::Ok().json(APIResponse {
                stats: DashboardStatsDTO {
                    total_students: stats.total_students,
                    reachable_students: stats.reachable_students,
                    active_jobs: stats.active_jobs,
                    reminders_sent: stats.reminders_sent,
                    delivery_rate: stats.delivery_rate,
                    recent_logs: stats.recent_logs.into_iter().map(MessageLogDTO::new).collect(),
                    upcoming_jobs: stats.upcoming_jobs.into_iter().map(JobDTO::new).collect(),
                },
            })
        })
        .map_err(|_| EduRemindError::InternalError)
}

#[derive(Debug)]
pub struct GetDashboardUseCase;

#[derive(Debug)]
pub struct DashboardStats {
    pub total_students: usize,
    pub reachable_students: usize,
    pub active_jobs: usize,
    pub reminders_sent: usize,
    pub delivery_rate: u32,
    pub recent_logs: Vec<MessageLog>,
    pub upcoming_jobs: Vec<Job>,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError,
}

/// Rounded percentage of delivered messages, 0 without any message
fn delivery_rate(logs: &[MessageLog]) -> u32 {
    if logs.is_empty() {
        return 0;
    }
    let delivered = logs
        .iter()
        .filter(|l| l.status == DeliveryStatus::Delivered)
        .count();
    ((delivered as f64 / logs.len() as f64) * 100.0).round() as u32
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetDashboardUseCase {
    type Response = DashboardStats;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "GetDashboard";

    async fn execute(&mut self, ctx: &EduRemindContext) -> Result<Self::Response, Self::Errors> {
        let students = ctx
            .repos
            .students
            .find_all()
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;
        let jobs = ctx
            .repos
            .jobs
            .find_all()
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;
        let logs = ctx
            .repos
            .message_logs
            .find_all()
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;
        let reminders_sent = ctx
            .repos
            .reminders
            .count_by_status(ReminderStatus::Sent)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        Ok(DashboardStats {
            total_students: students.len(),
            reachable_students: students.iter().filter(|s| s.is_reachable()).count(),
            active_jobs: jobs.len(),
            reminders_sent,
            delivery_rate: delivery_rate(&logs),
            recent_logs: logs.iter().rev().take(RECENT_LOGS).cloned().collect(),
            upcoming_jobs: jobs.into_iter().rev().take(UPCOMING_JOBS).collect(),
        })
    }
}
