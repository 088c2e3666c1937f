use crate::{
    error::EduRemindError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use edu_remind_api_structs::create_event::*;
use edu_remind_domain::Event;
use edu_remind_infra::EduRemindContext;

fn handle_error(e: UseCaseErrors) -> EduRemindError {
    match e {
        UseCaseErrors::MissingName => {
            EduRemindError::BadClientData("An event needs a name".into())
        }
        UseCaseErrors::StorageError => EduRemindError::InternalError,
    }
}

pub async fn create_event_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<EduRemindContext>,
) -> Result<HttpResponse, EduRemindError> {
    let body = body.0;
    let usecase = CreateEventUseCase {
        name: body.name,
        registration_date: body.registration_date,
        default_message: body.default_message,
    };

    execute(usecase, &ctx)
        .await
        .map(|event| HttpResponse::Created().json(APIResponse::new(event)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct CreateEventUseCase {
    pub name: String,
    pub registration_date: NaiveDate,
    pub default_message: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseErrors {
    MissingName,
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateEventUseCase {
    type Response = Event;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "CreateEvent";

    async fn execute(&mut self, ctx: &EduRemindContext) -> Result<Self::Response, Self::Errors> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(UseCaseErrors::MissingName);
        }

        let event = Event::new(
            name.to_string(),
            self.registration_date,
            self.default_message.take(),
        );
        ctx.repos
            .events
            .insert(&event)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        Ok(event)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use edu_remind_domain::{EventStatus, DEFAULT_EVENT_MESSAGE};

    #[actix_web::test]
    async fn creates_active_event() {
        let ctx = EduRemindContext::create_inmemory();
        let mut usecase = CreateEventUseCase {
            name: "Google Internship 2025".into(),
            registration_date: NaiveDate::from_ymd_opt(2024, 12, 15).unwrap(),
            default_message: None,
        };
        let event = usecase.execute(&ctx).await.unwrap();
        assert_eq!(event.status, EventStatus::Active);
        assert_eq!(event.default_message, DEFAULT_EVENT_MESSAGE);
        assert_eq!(ctx.repos.events.find(&event.id).await, Some(event));
    }

    #[actix_web::test]
    async fn rejects_blank_name() {
        let ctx = EduRemindContext::create_inmemory();
        let mut usecase = CreateEventUseCase {
            name: "  ".into(),
            registration_date: NaiveDate::from_ymd_opt(2024, 12, 15).unwrap(),
            default_message: None,
        };
        assert_eq!(usecase.execute(&ctx).await, Err(UseCaseErrors::MissingName));
    }
}
