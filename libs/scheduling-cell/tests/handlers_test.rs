// libs/scheduling-cell/tests/handlers_test.rs

use std::sync::Arc;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use serde_json::{json, Value};
use tower::ServiceExt;

use scheduling_cell::{scheduling_routes, Clock, SchedulingState};
use shared_config::AppConfig;

// Monday 2030-06-03, 10:00 local time
fn fixed_clock() -> Clock {
    Clock::Fixed(
        NaiveDate::from_ymd_opt(2030, 6, 3)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap(),
    )
}

fn create_test_app() -> Router {
    let state = SchedulingState::with_clock(Arc::new(AppConfig::default()), fixed_clock())
        .expect("default slot hours parse");
    scheduling_routes(Arc::new(state))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_calendar_grid_for_april_2025() {
    let app = create_test_app();
    let (status, json) = send(&app, get("/calendar/2025/3")).await;

    assert_eq!(status, StatusCode::OK);
    let days = json["days"].as_array().unwrap();
    assert_eq!(days.len(), 42);
    assert_eq!(days[0]["date"], "2025-03-31");
    assert_eq!(days[0]["in_current_month"], false);
    assert_eq!(days[41]["date"], "2025-05-11");
    // all of 2025 is before the fixed clock
    assert!(days.iter().all(|d| d["status"] == "past"));
    assert_eq!(json["next"]["month0"], 4);
    assert_eq!(json["previous"]["month0"], 2);
}

#[tokio::test]
async fn test_calendar_marks_today_sunday_and_past() {
    let app = create_test_app();
    let (status, json) = send(&app, get("/calendar/2030/5")).await;
    assert_eq!(status, StatusCode::OK);

    let days = json["days"].as_array().unwrap();
    let status_of = |date: &str| {
        days.iter()
            .find(|d| d["date"] == date)
            .map(|d| d["status"].clone())
            .unwrap()
    };

    assert_eq!(status_of("2030-06-01"), "past");
    assert_eq!(status_of("2030-06-03"), "selectable");
    assert_eq!(status_of("2030-06-09"), "sunday");
}

#[tokio::test]
async fn test_calendar_rejects_month_twelve() {
    let app = create_test_app();
    let (status, json) = send(&app, get("/calendar/2030/12")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("Invalid month"));
}

#[tokio::test]
async fn test_slots_for_today_only_after_now() {
    let app = create_test_app();
    let (status, json) = send(&app, get("/slots?date=2030-06-03")).await;

    assert_eq!(status, StatusCode::OK);
    let hours: Vec<&str> = json["slots"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["hour"].as_str().unwrap())
        .collect();
    assert_eq!(hours, vec!["11:00", "13:00", "14:30", "15:00", "16:00", "16:30"]);
}

#[tokio::test]
async fn test_slots_for_sunday_are_empty() {
    let app = create_test_app();
    let (status, json) = send(&app, get("/slots?date=2030-06-09")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "sunday");
    assert!(json["slots"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_first_available_skips_confirmed_vacation() {
    let app = create_test_app();

    let (status, _) = send(
        &app,
        post_json("/doctors/tacu-igor/vacation/days", json!({ "date": "2030-06-03" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, before) = send(&app, get("/first-available?doctor_id=tacu-igor")).await;
    assert_eq!(before["date"], "2030-06-03", "pending days do not block");

    let (status, confirmed) = send(&app, post_json("/doctors/tacu-igor/vacation/confirm", json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(confirmed["confirmed"], json!(["2030-06-03"]));

    let (_, after) = send(&app, get("/first-available?doctor_id=tacu-igor")).await;
    assert_eq!(after["date"], "2030-06-04");

    let (_, other) = send(&app, get("/first-available?doctor_id=rusnac-nichita")).await;
    assert_eq!(other["date"], "2030-06-03");

    let (_, slots) = send(&app, get("/slots?date=2030-06-03&doctor_id=tacu-igor")).await;
    assert_eq!(slots["status"], "blocked");
    assert!(slots["slots"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_vacation_eighth_day_is_rejected() {
    let app = create_test_app();
    let days = [
        "2030-06-04", "2030-06-05", "2030-06-06", "2030-06-07",
        "2030-06-08", "2030-06-10", "2030-06-11",
    ];

    for day in days {
        let (status, _) = send(
            &app,
            post_json("/doctors/pancenco-ina/vacation/days", json!({ "date": day })),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "adding {}", day);
    }

    let (status, json) = send(
        &app,
        post_json("/doctors/pancenco-ina/vacation/days", json!({ "date": "2030-06-12" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("At most 7"));

    let (_, snapshot) = send(&app, get("/doctors/pancenco-ina/vacation")).await;
    assert_eq!(snapshot["pending"].as_array().unwrap().len(), 7);
    assert_eq!(snapshot["max_days"], 7);
}

#[tokio::test]
async fn test_vacation_toggle_and_remove() {
    let app = create_test_app();

    let (_, selected) = send(
        &app,
        post_json("/doctors/tacu-igor/vacation/toggle", json!({ "date": "2030-06-05" })),
    )
    .await;
    assert_eq!(selected["pending"], json!(["2030-06-05"]));

    let delete = Request::builder()
        .method("DELETE")
        .uri("/doctors/tacu-igor/vacation/days/2030-06-05")
        .body(Body::empty())
        .unwrap();
    let (status, removed) = send(&app, delete).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(removed["pending"], json!([]));

    let delete_again = Request::builder()
        .method("DELETE")
        .uri("/doctors/tacu-igor/vacation/days/2030-06-05")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&app, delete_again).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_vacation_on_sunday_is_a_validation_error() {
    let app = create_test_app();
    let (status, json) = send(
        &app,
        post_json("/doctors/tacu-igor/vacation/days", json!({ "date": "2030-06-09" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("Sunday"));
}

#[tokio::test]
async fn test_rejected_input_returns_json_error() {
    let app = create_test_app();

    let (status, json) = send(&app, get("/calendar/2025/-1")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].is_string());

    let (status, json) = send(&app, get("/slots?date=2025-02-30")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].is_string());

    let malformed = Request::builder()
        .method("POST")
        .uri("/doctors/tacu-igor/vacation/days")
        .header("content-type", "application/json")
        .body(Body::from("{\"date\": "))
        .unwrap();
    let (status, json) = send(&app, malformed).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_roster_rejects_unknown_doctor_ids() {
    let state = SchedulingState::with_clock(Arc::new(AppConfig::default()), fixed_clock())
        .expect("default slot hours parse")
        .with_doctor_roster(["tacu-igor", "rusnac-nichita"]);
    let app = scheduling_routes(Arc::new(state));

    let (status, json) = send(
        &app,
        post_json("/doctors/dr-tacu/vacation/days", json!({ "date": "2030-06-04" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].as_str().unwrap().contains("dr-tacu"));

    let (status, _) = send(&app, get("/first-available?doctor_id=dr-tacu")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        post_json("/doctors/tacu-igor/vacation/days", json!({ "date": "2030-06-04" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}
