use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};

use booking_cell::{booking_routes, DirectoryService};
use chat_cell::chat_routes;
use scheduling_cell::{scheduling_routes, SchedulingState};
use shared_config::AppConfig;

pub fn create_router(config: Arc<AppConfig>) -> anyhow::Result<Router> {
    // One scheduling state so booking sees the same vacation days.
    let scheduling = Arc::new(
        SchedulingState::new(config.clone())?
            .with_doctor_roster(DirectoryService::new().doctor_ids()),
    );

    Ok(Router::new()
        .route("/", get(|| async { "Booking portal API is running!" }))
        .nest("/scheduling", scheduling_routes(scheduling.clone()))
        .nest("/booking", booking_routes(scheduling))
        .nest("/chat", chat_routes(&config)?))
}
