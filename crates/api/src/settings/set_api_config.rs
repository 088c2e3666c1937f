use super::store::store_api_config;
use crate::{
    error::EduRemindError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use edu_remind_api_structs::set_api_config::*;
use edu_remind_domain::ApiConfig;
use edu_remind_infra::EduRemindContext;

pub async fn set_api_config_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<EduRemindContext>,
) -> Result<HttpResponse, EduRemindError> {
    let body = body.0;
    let usecase = SetApiConfigUseCase {
        config: ApiConfig {
            phone_id: body.phone_id,
            access_token: body.access_token,
            is_production: body.is_production,
            use_fallback: body.use_fallback,
        },
    };

    execute(usecase, &ctx)
        .await
        .map(|config| HttpResponse::Ok().json(APIResponse::new(config)))
        .map_err(|_| EduRemindError::InternalError)
}

#[derive(Debug)]
pub struct SetApiConfigUseCase {
    pub config: ApiConfig,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for SetApiConfigUseCase {
    type Response = ApiConfig;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "SetApiConfig";

    async fn execute(&mut self, ctx: &EduRemindContext) -> Result<Self::Response, Self::Errors> {
        store_api_config(&self.config, ctx)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;
        Ok(self.config.clone())
    }
}
