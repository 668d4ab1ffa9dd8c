mod create_reminder;
mod delete_reminder;
mod deliver_reminder;
mod get_reminder;
mod get_reminders;

use actix_web::web;
use create_reminder::create_reminder_controller;
use delete_reminder::delete_reminder_controller;
use get_reminder::get_reminder_controller;
use get_reminders::get_reminders_controller;

pub use create_reminder::CreateReminderUseCase;
pub use deliver_reminder::{deliver_reminder, DeliveryOutcome};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/reminders", web::post().to(create_reminder_controller));
    cfg.route("/reminders", web::get().to(get_reminders_controller));
    cfg.route(
        "/reminders/{reminder_id}",
        web::get().to(get_reminder_controller),
    );
    cfg.route(
        "/reminders/{reminder_id}",
        web::delete().to(delete_reminder_controller),
    );
}
