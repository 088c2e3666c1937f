mod add_event_participant;
mod add_event_reminder;
mod broadcast_event_reminder;
mod create_event;
mod delete_event;
mod get_event;
mod get_events;
mod remove_event_participant;

use actix_web::web;
use add_event_participant::add_event_participant_controller;
use add_event_reminder::add_event_reminder_controller;
use broadcast_event_reminder::broadcast_event_reminder_controller;
use create_event::create_event_controller;
use delete_event::delete_event_controller;
use get_event::get_event_controller;
use get_events::get_events_controller;
use remove_event_participant::remove_event_participant_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/events", web::get().to(get_events_controller));
    cfg.route("/events", web::post().to(create_event_controller));

    cfg.route("/events/{event_id}", web::get().to(get_event_controller));
    cfg.route(
        "/events/{event_id}",
        web::delete().to(delete_event_controller),
    );

    cfg.route(
        "/events/{event_id}/participants",
        web::post().to(add_event_participant_controller),
    );
    cfg.route(
        "/events/{event_id}/participants/{user_id}",
        web::delete().to(remove_event_participant_controller),
    );

    cfg.route(
        "/events/{event_id}/reminders",
        web::post().to(add_event_reminder_controller),
    );
    cfg.route(
        "/events/{event_id}/reminders/{reminder_id}/broadcast",
        web::post().to(broadcast_event_reminder_controller),
    );
}
