use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post, delete},
};

use crate::handlers;
use crate::state::SchedulingState;

pub fn scheduling_routes(state: Arc<SchedulingState>) -> Router {
    let calendar_routes = Router::new()
        .route("/calendar/{year}/{month}", get(handlers::get_calendar))
        .route("/slots", get(handlers::get_available_slots))
        .route("/first-available", get(handlers::get_first_available_day));

    let vacation_routes = Router::new()
        .route("/doctors/{doctor_id}/vacation", get(handlers::get_vacation))
        .route("/doctors/{doctor_id}/vacation/days", post(handlers::add_vacation_day))
        .route("/doctors/{doctor_id}/vacation/days/{date}", delete(handlers::remove_vacation_day))
        .route("/doctors/{doctor_id}/vacation/toggle", post(handlers::toggle_vacation_day))
        .route("/doctors/{doctor_id}/vacation/confirm", post(handlers::confirm_vacation));

    Router::new()
        .merge(calendar_routes)
        .merge(vacation_routes)
        .with_state(state)
}
