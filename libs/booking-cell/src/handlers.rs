use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use tracing::info;
use uuid::Uuid;

use shared_models::error::AppError;
use shared_models::extract::{AppJson, AppPath, AppQuery};

use crate::models::{AppointmentQuery, BookAppointmentRequest, CancelAppointmentRequest};
use crate::router::BookingState;

// ==============================================================================
// DIRECTORY
// ==============================================================================

pub async fn list_cities(
    State(state): State<Arc<BookingState>>,
) -> Result<Json<Value>, AppError> {
    Ok(Json(json!({ "cities": state.directory.cities() })))
}

pub async fn list_hospitals(
    State(state): State<Arc<BookingState>>,
    AppPath(city): AppPath<String>,
) -> Result<Json<Value>, AppError> {
    let hospitals = state.directory.hospitals(&city)?;
    Ok(Json(json!({
        "city": city,
        "hospitals": hospitals,
    })))
}

pub async fn list_departments(
    State(state): State<Arc<BookingState>>,
) -> Result<Json<Value>, AppError> {
    Ok(Json(json!({ "departments": state.directory.departments() })))
}

pub async fn list_department_doctors(
    State(state): State<Arc<BookingState>>,
    AppPath(department): AppPath<String>,
) -> Result<Json<Value>, AppError> {
    let department = state.directory.department(&department)?;
    Ok(Json(json!(department)))
}

// ==============================================================================
// APPOINTMENTS
// ==============================================================================

#[axum::debug_handler]
pub async fn book_appointment(
    State(state): State<Arc<BookingState>>,
    AppJson(request): AppJson<BookAppointmentRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let now = state.scheduling.clock.now();
    let blocked = state.scheduling.blocked_days(Some(request.doctor_id.as_str())).await;

    let appointment = state
        .appointments
        .book(request, &state.directory, &state.scheduling.slots, now, &blocked)
        .await?;

    Ok((StatusCode::CREATED, Json(json!(appointment))))
}

pub async fn list_appointments(
    State(state): State<Arc<BookingState>>,
    AppQuery(query): AppQuery<AppointmentQuery>,
) -> Result<Json<Value>, AppError> {
    let appointments = state.appointments.list(query.status).await;
    Ok(Json(json!({
        "total": appointments.len(),
        "appointments": appointments,
    })))
}

pub async fn get_appointment(
    State(state): State<Arc<BookingState>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<Value>, AppError> {
    let appointment = state.appointments.get(id).await?;
    Ok(Json(json!(appointment)))
}

#[axum::debug_handler]
pub async fn cancel_appointment(
    State(state): State<Arc<BookingState>>,
    AppPath(id): AppPath<Uuid>,
    AppJson(request): AppJson<CancelAppointmentRequest>,
) -> Result<Json<Value>, AppError> {
    let appointment = state.appointments.cancel(id, &request.reason).await?;
    info!("Appointment {} cancelled", id);
    Ok(Json(json!(appointment)))
}

pub async fn complete_appointment(
    State(state): State<Arc<BookingState>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<Value>, AppError> {
    let appointment = state.appointments.complete(id).await?;
    Ok(Json(json!(appointment)))
}
