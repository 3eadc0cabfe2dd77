use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use scheduling_cell::SchedulingState;

use crate::handlers;
use crate::services::{AppointmentBook, DirectoryService};

pub struct BookingState {
    pub scheduling: Arc<SchedulingState>,
    pub directory: DirectoryService,
    pub appointments: AppointmentBook,
}

impl BookingState {
    pub fn new(scheduling: Arc<SchedulingState>) -> Self {
        Self {
            scheduling,
            directory: DirectoryService::new(),
            appointments: AppointmentBook::new(),
        }
    }
}

pub fn booking_routes(scheduling: Arc<SchedulingState>) -> Router {
    let state = Arc::new(BookingState::new(scheduling));

    let directory_routes = Router::new()
        .route("/cities", get(handlers::list_cities))
        .route("/cities/{city}/hospitals", get(handlers::list_hospitals))
        .route("/departments", get(handlers::list_departments))
        .route("/departments/{department}/doctors", get(handlers::list_department_doctors));

    let appointment_routes = Router::new()
        .route("/appointments", post(handlers::book_appointment).get(handlers::list_appointments))
        .route("/appointments/{id}", get(handlers::get_appointment))
        .route("/appointments/{id}/cancel", post(handlers::cancel_appointment))
        .route("/appointments/{id}/complete", post(handlers::complete_appointment));

    Router::new()
        .merge(directory_routes)
        .merge(appointment_routes)
        .with_state(state)
}
