mod get_message_logs;

use actix_web::web;
use get_message_logs::get_message_logs_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/logs", web::get().to(get_message_logs_controller));
}
