use std::sync::Arc;

use axum::{
    extract::State,
    Json,
};
use chrono::NaiveDate;
use serde_json::{json, Value};
use tracing::info;

use shared_models::error::AppError;
use shared_models::extract::{AppJson, AppPath, AppQuery};

use crate::models::{CalendarMonth, DoctorQuery, SlotQuery, VacationDayRequest};
use crate::services::{calendar, eligibility};
use crate::state::SchedulingState;

// ==============================================================================
// CALENDAR & SLOTS
// ==============================================================================

#[axum::debug_handler]
pub async fn get_calendar(
    State(state): State<Arc<SchedulingState>>,
    AppPath((year, month0)): AppPath<(i32, u32)>,
    AppQuery(query): AppQuery<DoctorQuery>,
) -> Result<Json<Value>, AppError> {
    let month = CalendarMonth::new(year, month0)?;
    let grid = calendar::grid_for(month)?;

    let today = state.clock.today();
    let blocked = state.known_blocked_days(query.doctor_id.as_deref()).await?;

    let days: Vec<Value> = grid
        .days
        .iter()
        .map(|day| {
            json!({
                "date": day.date,
                "in_current_month": day.in_current_month,
                "status": eligibility::classify(day.date, today, &blocked),
            })
        })
        .collect();

    Ok(Json(json!({
        "year": grid.year,
        "month": grid.month0,
        "today": today,
        "previous": month.previous(),
        "next": month.next(),
        "days": days,
    })))
}

#[axum::debug_handler]
pub async fn get_available_slots(
    State(state): State<Arc<SchedulingState>>,
    AppQuery(query): AppQuery<SlotQuery>,
) -> Result<Json<Value>, AppError> {
    let now = state.clock.now();
    let blocked = state.known_blocked_days(query.doctor_id.as_deref()).await?;
    let status = eligibility::classify(query.date, now.date(), &blocked);
    let slots = state.slots.available_slots_for(query.date, now, &blocked);

    Ok(Json(json!({
        "date": query.date,
        "status": status,
        "slots": slots,
    })))
}

pub async fn get_first_available_day(
    State(state): State<Arc<SchedulingState>>,
    AppQuery(query): AppQuery<DoctorQuery>,
) -> Result<Json<Value>, AppError> {
    let today = state.clock.today();
    let blocked = state.known_blocked_days(query.doctor_id.as_deref()).await?;

    let date = eligibility::first_selectable(today, &blocked)
        .ok_or_else(|| AppError::NotFound("No selectable day in the next year".to_string()))?;

    Ok(Json(json!({ "date": date })))
}

// ==============================================================================
// VACATION DAYS
// ==============================================================================

pub async fn get_vacation(
    State(state): State<Arc<SchedulingState>>,
    AppPath(doctor_id): AppPath<String>,
) -> Result<Json<Value>, AppError> {
    state.ensure_known_doctor(&doctor_id)?;
    let snapshot = state.vacations.snapshot(&doctor_id).await;
    Ok(Json(json!(snapshot)))
}

pub async fn add_vacation_day(
    State(state): State<Arc<SchedulingState>>,
    AppPath(doctor_id): AppPath<String>,
    AppJson(request): AppJson<VacationDayRequest>,
) -> Result<Json<Value>, AppError> {
    state.ensure_known_doctor(&doctor_id)?;
    let snapshot = state
        .vacations
        .add_day(&doctor_id, request.date, state.clock.today())
        .await?;
    Ok(Json(json!(snapshot)))
}

pub async fn toggle_vacation_day(
    State(state): State<Arc<SchedulingState>>,
    AppPath(doctor_id): AppPath<String>,
    AppJson(request): AppJson<VacationDayRequest>,
) -> Result<Json<Value>, AppError> {
    state.ensure_known_doctor(&doctor_id)?;
    let snapshot = state
        .vacations
        .toggle_day(&doctor_id, request.date, state.clock.today())
        .await?;
    Ok(Json(json!(snapshot)))
}

pub async fn remove_vacation_day(
    State(state): State<Arc<SchedulingState>>,
    AppPath((doctor_id, date)): AppPath<(String, NaiveDate)>,
) -> Result<Json<Value>, AppError> {
    state.ensure_known_doctor(&doctor_id)?;
    let (removed, snapshot) = state.vacations.remove_day(&doctor_id, date).await;
    if !removed {
        return Err(AppError::NotFound(format!("{} is not a selected vacation day", date)));
    }
    Ok(Json(json!(snapshot)))
}

pub async fn confirm_vacation(
    State(state): State<Arc<SchedulingState>>,
    AppPath(doctor_id): AppPath<String>,
) -> Result<Json<Value>, AppError> {
    state.ensure_known_doctor(&doctor_id)?;
    let confirmed = state.vacations.confirm(&doctor_id).await;
    info!("Vacation confirmed for doctor {}: {:?}", doctor_id, confirmed);

    Ok(Json(json!({
        "doctor_id": doctor_id,
        "confirmed": confirmed,
    })))
}
