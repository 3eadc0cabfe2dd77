use std::sync::Arc;

use axum::{routing::post, Router};

use shared_config::AppConfig;

use crate::handlers;
use crate::services::ChatService;

pub fn chat_routes(config: &AppConfig) -> anyhow::Result<Router> {
    let service = Arc::new(ChatService::new(config)?);

    Ok(Router::new()
        .route("/", post(handlers::post_chat))
        .with_state(service))
}
