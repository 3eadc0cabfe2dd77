use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::{json, Value};

use shared_models::error::AppError;
use shared_models::extract::AppJson;

use crate::models::ChatRequest;
use crate::services::ChatService;

#[axum::debug_handler]
pub async fn post_chat(
    State(service): State<Arc<ChatService>>,
    AppJson(request): AppJson<ChatRequest>,
) -> Result<Json<Value>, AppError> {
    if request.messages.is_empty() {
        return Err(AppError::BadRequest("At least one message is required".to_string()));
    }

    let reply = service.reply(&request.messages).await;
    Ok(Json(json!(reply)))
}
