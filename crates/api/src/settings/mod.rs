mod audit;
mod get_admin_credentials;
mod get_api_config;
mod login;
mod set_admin_credentials;
mod set_api_config;
mod store;

use actix_web::web;
pub use audit::start_settings_audit;
use get_admin_credentials::get_admin_credentials_controller;
use get_api_config::get_api_config_controller;
use login::login_controller;
use set_admin_credentials::set_admin_credentials_controller;
use set_api_config::set_api_config_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/settings/api-config",
        web::get().to(get_api_config_controller),
    );
    cfg.route(
        "/settings/api-config",
        web::put().to(set_api_config_controller),
    );
    cfg.route(
        "/settings/credentials",
        web::get().to(get_admin_credentials_controller),
    );
    cfg.route(
        "/settings/credentials",
        web::put().to(set_admin_credentials_controller),
    );
    cfg.route("/auth/login", web::post().to(login_controller));
}
