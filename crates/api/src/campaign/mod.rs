mod generate_template_params;
mod get_campaigns;
mod get_message_templates;
mod schedule_campaign;

use actix_web::web;
use generate_template_params::generate_template_params_controller;
use get_campaigns::get_campaigns_controller;
use get_message_templates::get_message_templates_controller;
use schedule_campaign::schedule_campaign_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/campaigns/templates",
        web::get().to(get_message_templates_controller),
    );
    cfg.route(
        "/campaigns/params",
        web::post().to(generate_template_params_controller),
    );
    cfg.route("/campaigns", web::get().to(get_campaigns_controller));
    cfg.route("/campaigns", web::post().to(schedule_campaign_controller));
}
