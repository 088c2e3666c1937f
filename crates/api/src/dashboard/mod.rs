mod get_dashboard;

use actix_web::web;
use get_dashboard::get_dashboard_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/dashboard", web::get().to(get_dashboard_controller));
}
