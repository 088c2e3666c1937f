mod create_student;
mod delete_student;
mod get_students;
mod toggle_student_opt_in;

use actix_web::web;
use create_student::create_student_controller;
use delete_student::delete_student_controller;
use get_students::get_students_controller;
use toggle_student_opt_in::toggle_student_opt_in_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/students", web::get().to(get_students_controller));
    cfg.route("/students", web::post().to(create_student_controller));
    cfg.route(
        "/students/{student_id}",
        web::delete().to(delete_student_controller),
    );
    cfg.route(
        "/students/{student_id}/opt-in",
        web::put().to(toggle_student_opt_in_controller),
    );
}
