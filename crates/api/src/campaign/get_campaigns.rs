use crate::{
    error::EduRemindError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use edu_remind_api_structs::get_campaigns::*;
use edu_remind_domain::Reminder;
use edu_remind_infra::EduRemindContext;

pub async fn get_campaigns_controller(
    ctx: web::Data<EduRemindContext>,
) -> Result<HttpResponse, EduRemindError> {
    execute(GetCampaignsUseCase, &ctx)
        .await
        .map(|campaigns| HttpResponse::Ok().json(APIResponse::new(campaigns)))
        .map_err(|_| EduRemindError::InternalError)
}

#[derive(Debug)]
pub struct GetCampaignsUseCase;

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetCampaignsUseCase {
    type Response = Vec<Reminder>;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "GetCampaigns";

    async fn execute(&mut self, ctx: &EduRemindContext) -> Result<Self::Response, Self::Errors> {
        let mut campaigns = ctx
            .repos
            .reminders
            .find_all()
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;
        campaigns.reverse();
        Ok(campaigns)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use edu_remind_domain::{ReminderType, ID};

    #[actix_web::test]
    async fn lists_newest_first() {
        let ctx = EduRemindContext::create_inmemory();
        let job_id = ID::default();
        let first = Reminder::new_sent(
            job_id.clone(),
            ReminderType::NewJob,
            "job_alert_v1".into(),
            0,
            Vec::new(),
        );
        let second = Reminder::new_sent(
            job_id,
            ReminderType::Deadline,
            "deadline_alert_v2".into(),
            10,
            Vec::new(),
        );
        ctx.repos.reminders.insert(&first).await.unwrap();
        ctx.repos.reminders.insert(&second).await.unwrap();

        let mut usecase = GetCampaignsUseCase;
        let campaigns = usecase.execute(&ctx).await.unwrap();
        assert_eq!(campaigns, vec![second, first]);
    }

    #[actix_web::test]
    async fn empty_without_campaigns() {
        let ctx = EduRemindContext::create_inmemory();
        let mut usecase = GetCampaignsUseCase;
        assert!(usecase.execute(&ctx).await.unwrap().is_empty());
    }
}
