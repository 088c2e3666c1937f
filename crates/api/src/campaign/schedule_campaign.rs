use super::generate_template_params::template_params_for;
use crate::{
    error::EduRemindError,
    shared::{
        dispatch::dispatch_all,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpResponse};
use edu_remind_api_structs::schedule_campaign::*;
use edu_remind_domain::{campaign_messages, MessageTemplate, Reminder, ReminderType, ID};
use edu_remind_infra::EduRemindContext;
use tracing::info;

fn handle_error(e: UseCaseErrors) -> EduRemindError {
    match e {
        UseCaseErrors::JobNotFound(job_id) => EduRemindError::NotFound(format!(
            "The job with id: {}, was not found.",
            job_id
        )),
        UseCaseErrors::UnknownTemplate(template_id) => EduRemindError::BadClientData(format!(
            "The message template: {}, does not exist.",
            template_id
        )),
        UseCaseErrors::EmptyTargetGroup => {
            EduRemindError::BadClientData("The campaign must target at least one student".into())
        }
        UseCaseErrors::StorageError => EduRemindError::InternalError,
    }
}

pub async fn schedule_campaign_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<EduRemindContext>,
) -> Result<HttpResponse, EduRemindError> {
    let body = body.0;
    let usecase = ScheduleCampaignUseCase {
        job_id: body.job_id,
        reminder_type: body.reminder_type,
        template_id: body.template_id,
        scheduled_at: body.scheduled_at,
        target_group: body.target_group,
        params: body.params,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| {
            HttpResponse::Created().json(APIResponse::new(res.campaign, res.messages_queued))
        })
        .map_err(handle_error)
}

/// Stores the campaign and messages every targeted student right away
#[derive(Debug)]
pub struct ScheduleCampaignUseCase {
    pub job_id: ID,
    pub reminder_type: ReminderType,
    pub template_id: String,
    pub scheduled_at: Option<i64>,
    /// Every reachable student when missing
    pub target_group: Option<Vec<ID>>,
    /// Generated when missing
    pub params: Option<Vec<String>>,
}

#[derive(Debug)]
pub struct UseCaseResponse {
    pub campaign: Reminder,
    pub messages_queued: usize,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseErrors {
    JobNotFound(ID),
    UnknownTemplate(String),
    EmptyTargetGroup,
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for ScheduleCampaignUseCase {
    type Response = UseCaseResponse;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "ScheduleCampaign";

    async fn execute(&mut self, ctx: &EduRemindContext) -> Result<Self::Response, Self::Errors> {
        let job = ctx
            .repos
            .jobs
            .find(&self.job_id)
            .await
            .ok_or_else(|| UseCaseErrors::JobNotFound(self.job_id.clone()))?;
        let template = MessageTemplate::find(&self.template_id)
            .ok_or_else(|| UseCaseErrors::UnknownTemplate(self.template_id.clone()))?;

        let students = ctx
            .repos
            .students
            .find_all()
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;
        let target_group = match self.target_group.take() {
            Some(ids) => ids,
            None => students
                .iter()
                .filter(|s| s.is_reachable())
                .map(|s| s.id.clone())
                .collect(),
        };
        if target_group.is_empty() {
            return Err(UseCaseErrors::EmptyTargetGroup);
        }

        let params = match self.params.take() {
            Some(params) => params,
            None => template_params_for(&job, self.reminder_type, ctx).await.params,
        };

        let campaign = Reminder::new_sent(
            job.id.clone(),
            self.reminder_type,
            template.id.to_string(),
            self.scheduled_at
                .unwrap_or_else(|| ctx.sys.get_timestamp_millis()),
            target_group,
        );
        ctx.repos
            .reminders
            .insert(&campaign)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        let messages = campaign_messages(&campaign, template, &params, &students);
        let logs = dispatch_all(messages, ctx).await;
        ctx.repos
            .message_logs
            .insert_many(&logs)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        info!(
            "Campaign {} about job {} messaged {} students",
            campaign.id,
            job.id,
            logs.len()
        );

        Ok(UseCaseResponse {
            messages_queued: logs.len(),
            campaign,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use edu_remind_domain::{DeliveryStatus, Job, Student, StudentFields};

    async fn setup() -> (EduRemindContext, Job, Vec<Student>) {
        let ctx = EduRemindContext::create_inmemory();
        let job = Job::new(
            "SDE Intern".into(),
            "Google".into(),
            None,
            "https://careers.google.com".into(),
            "".into(),
        );
        ctx.repos.jobs.insert(&job).await.unwrap();

        let students = [
            ("Asha", "9876543210", true),
            ("Rahul", "12345", true),
            ("Priya", "9123456780", false),
            ("Vikram", "9988776655", true),
        ]
        .iter()
        .map(|(name, phone, opted_in)| {
            Student::new(
                StudentFields {
                    name: name.to_string(),
                    phone: phone.to_string(),
                    ..Default::default()
                },
                *opted_in,
            )
        })
        .collect::<Vec<_>>();
        ctx.repos.students.insert_many(&students).await.unwrap();
        (ctx, job, students)
    }

    fn usecase(job: &Job) -> ScheduleCampaignUseCase {
        ScheduleCampaignUseCase {
            job_id: job.id.clone(),
            reminder_type: ReminderType::NewJob,
            template_id: "job_alert_v1".into(),
            scheduled_at: Some(1_700_000_000_000),
            target_group: None,
            params: Some(vec![
                "ignored".into(),
                "SDE Intern".into(),
                "Google".into(),
                "Dec 15".into(),
                "https://g.co".into(),
            ]),
        }
    }

    #[actix_web::test]
    async fn messages_reachable_students_by_default() {
        let (ctx, job, students) = setup().await;

        let res = usecase(&job).execute(&ctx).await.unwrap();
        assert_eq!(res.messages_queued, 2);
        assert_eq!(
            res.campaign.target_group,
            vec![students[0].id.clone(), students[3].id.clone()]
        );

        let logs = ctx.repos.message_logs.find_all().await.unwrap();
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].origin.recipient_name(), "Asha");
        assert_eq!(logs[0].status, DeliveryStatus::Queued);
        assert_eq!(
            logs[0].content,
            "Hi Asha, Exciting news! 🚀 A new role: SDE Intern at Google has just been posted. Deadline: Dec 15. Apply now: https://g.co"
        );
        assert_eq!(
            logs[1].template_params.as_ref().unwrap()[0],
            "Vikram".to_string()
        );
        assert_eq!(
            ctx.repos
                .reminders
                .count_by_status(edu_remind_domain::ReminderStatus::Sent)
                .await
                .unwrap(),
            1
        );
    }

    #[actix_web::test]
    async fn explicit_targets_follow_registry_order() {
        let (ctx, job, students) = setup().await;
        let mut usecase = usecase(&job);
        usecase.target_group = Some(vec![students[2].id.clone(), students[0].id.clone()]);

        let res = usecase.execute(&ctx).await.unwrap();
        assert_eq!(res.messages_queued, 2);
        let names = ctx
            .repos
            .message_logs
            .find_all()
            .await
            .unwrap()
            .iter()
            .map(|l| l.origin.recipient_name().to_string())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["Asha", "Priya"]);
    }

    #[actix_web::test]
    async fn generates_params_when_missing() {
        let (ctx, job, _) = setup().await;
        let mut usecase = usecase(&job);
        usecase.params = None;

        usecase.execute(&ctx).await.unwrap();
        let logs = ctx.repos.message_logs.find_all().await.unwrap();
        assert_eq!(
            logs[0].template_params,
            Some(vec![
                "Asha".to_string(),
                "SDE Intern".into(),
                "Google".into(),
                "".into(),
                "https://careers.google.com".into(),
            ])
        );
    }

    #[actix_web::test]
    async fn validates_the_request() {
        let (ctx, job, _) = setup().await;

        let mut unknown_template = usecase(&job);
        unknown_template.template_id = "missing".into();
        assert_eq!(
            unknown_template.execute(&ctx).await.unwrap_err(),
            UseCaseErrors::UnknownTemplate("missing".into())
        );

        let mut empty_group = usecase(&job);
        empty_group.target_group = Some(vec![]);
        assert_eq!(
            empty_group.execute(&ctx).await.unwrap_err(),
            UseCaseErrors::EmptyTargetGroup
        );

        let mut unknown_job = usecase(&job);
        unknown_job.job_id = ID::default();
        assert!(matches!(
            unknown_job.execute(&ctx).await,
            Err(UseCaseErrors::JobNotFound(_))
        ));

        assert!(ctx.repos.message_logs.find_all().await.unwrap().is_empty());
    }
}
