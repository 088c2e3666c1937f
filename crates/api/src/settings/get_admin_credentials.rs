use super::store::load_admin_credentials;
use actix_web::{web, HttpResponse};
use edu_remind_api_structs::get_admin_credentials::*;
use edu_remind_infra::EduRemindContext;

pub async fn get_admin_credentials_controller(ctx: web::Data<EduRemindContext>) -> HttpResponse {
    let creds = load_admin_credentials(&ctx).await;
    HttpResponse::Ok().json(APIResponse {
        username: creds.username,
    })
}
