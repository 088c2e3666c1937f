use super::store::load_api_config;
use actix_web::{web, HttpResponse};
use edu_remind_api_structs::get_api_config::*;
use edu_remind_infra::EduRemindContext;

pub async fn get_api_config_controller(ctx: web::Data<EduRemindContext>) -> HttpResponse {
    let config = load_api_config(&ctx).await;
    HttpResponse::Ok().json(APIResponse::new(config))
}
