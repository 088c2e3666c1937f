mod clear_import_preview;
mod commit_import;
mod get_import_preview;
mod get_import_template;
mod parse_import_file;
mod parse_import_text;

use actix_web::web;
use clear_import_preview::clear_import_preview_controller;
use commit_import::commit_import_controller;
use get_import_preview::get_import_preview_controller;
use get_import_template::get_import_template_controller;
use parse_import_file::parse_import_file_controller;
use parse_import_text::parse_import_text_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/students/import/text",
        web::post().to(parse_import_text_controller),
    );
    cfg.route(
        "/students/import/file",
        web::post().to(parse_import_file_controller),
    );
    cfg.route(
        "/students/import/preview",
        web::get().to(get_import_preview_controller),
    );
    cfg.route(
        "/students/import/preview",
        web::delete().to(clear_import_preview_controller),
    );
    cfg.route(
        "/students/import/commit",
        web::post().to(commit_import_controller),
    );
    cfg.route(
        "/students/import/template",
        web::get().to(get_import_template_controller),
    );
}
