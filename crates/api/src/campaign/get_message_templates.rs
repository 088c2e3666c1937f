use actix_web::HttpResponse;
use edu_remind_api_structs::get_message_templates::*;
use edu_remind_domain::MESSAGE_TEMPLATES;

pub async fn get_message_templates_controller() -> HttpResponse {
    HttpResponse::Ok().json(APIResponse::new(&MESSAGE_TEMPLATES))
}
