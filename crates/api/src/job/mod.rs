mod create_job;
mod delete_job;
mod get_jobs;

use actix_web::web;
use create_job::create_job_controller;
use delete_job::delete_job_controller;
use get_jobs::get_jobs_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/jobs", web::get().to(get_jobs_controller));
    cfg.route("/jobs", web::post().to(create_job_controller));
    cfg.route("/jobs/{job_id}", web::delete().to(delete_job_controller));
}
