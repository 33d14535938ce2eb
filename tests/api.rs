// Drives the HTTP control surface end to end against a live timer loop.
// Time is paused so countdowns run instantly and deterministically.

use std::{sync::Arc, time::Duration};

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use focus_timer::{create_router, services::CuePlayer, spawn_timer, AppState};

fn app(duration: u64) -> Router {
    let (link, _task) = spawn_timer(duration, CuePlayer::Silent);
    let state = Arc::new(AppState::new(link, 20554, "127.0.0.1".to_string()));
    create_router(state)
}

async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

#[tokio::test(start_paused = true)]
async fn health_reports_ok() {
    let app = app(60);
    let (status, body) = call(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test(start_paused = true)]
async fn fresh_timer_is_idle_with_picker_shown() {
    let app = app(60);
    let (status, body) = call(&app, Method::GET, "/status", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["timer"]["status"], "idle");
    assert_eq!(body["timer"]["remaining_seconds"], Value::Null);
    assert_eq!(body["view"]["duration_picker_visible"], true);
    assert_eq!(body["view"]["cancel_enabled"], false);
    assert_eq!(body["view"]["toggle_title"], "Start");
    assert_eq!(body["selected_duration_seconds"], 60);
    assert_eq!(body["last_action"], Value::Null);
}

#[tokio::test(start_paused = true)]
async fn five_second_session_runs_to_completion() {
    let app = app(60);

    let (status, _) = call(&app, Method::PUT, "/duration", Some(json!({ "seconds": 5 }))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = call(&app, Method::POST, "/toggle", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "running");
    assert_eq!(body["timer"]["remaining_seconds"], 5);
    assert_eq!(body["view"]["countdown_visible"], true);
    assert_eq!(body["view"]["duration_picker_visible"], false);
    assert_eq!(body["view"]["cancel_enabled"], true);
    assert_eq!(body["view"]["toggle_title"], "Pause");

    tokio::time::sleep(Duration::from_millis(4500)).await;

    let (_, body) = call(&app, Method::GET, "/status", None).await;
    assert_eq!(body["timer"]["status"], "idle");
    assert_eq!(body["view"]["label"], "00:00:00");
    assert_eq!(body["view"]["progress"], 0.0);
    assert_eq!(body["view"]["completion_cues"], 1);
    assert_eq!(body["view"]["cancel_enabled"], false);
    assert_eq!(body["view"]["duration_picker_visible"], true);
    assert_eq!(body["last_action"], "toggle");
}

#[tokio::test(start_paused = true)]
async fn pause_resume_and_cancel() {
    let app = app(10);

    call(&app, Method::POST, "/toggle", None).await;
    tokio::time::sleep(Duration::from_millis(2500)).await;

    let (_, body) = call(&app, Method::POST, "/toggle", None).await;
    assert_eq!(body["status"], "paused");
    assert_eq!(body["timer"]["remaining_seconds"], 7);
    assert_eq!(body["view"]["label"], "00:00:07");
    assert_eq!(body["view"]["toggle_title"], "Start");

    tokio::time::sleep(Duration::from_secs(30)).await;
    let (_, body) = call(&app, Method::GET, "/status", None).await;
    assert_eq!(body["timer"]["remaining_seconds"], 7);

    let (_, body) = call(&app, Method::POST, "/toggle", None).await;
    assert_eq!(body["status"], "running");

    let (status, body) = call(&app, Method::POST, "/cancel", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "idle");
    assert_eq!(body["view"]["countdown_visible"], false);
    assert_eq!(body["view"]["completion_cues"], 0);

    tokio::time::sleep(Duration::from_secs(30)).await;
    let (_, body) = call(&app, Method::GET, "/status", None).await;
    assert_eq!(body["timer"]["status"], "idle");
    assert_eq!(body["view"]["completion_cues"], 0);
}

#[tokio::test(start_paused = true)]
async fn cancel_when_idle_changes_nothing() {
    let app = app(60);
    let (_, before) = call(&app, Method::GET, "/status", None).await;

    let (status, body) = call(&app, Method::POST, "/cancel", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "idle");
    assert_eq!(body["view"], before["view"]);
}

#[tokio::test(start_paused = true)]
async fn out_of_range_duration_is_rejected() {
    let app = app(60);

    let (status, _) = call(&app, Method::PUT, "/duration", Some(json!({ "seconds": 86_400 }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = call(&app, Method::PUT, "/duration", Some(json!({ "seconds": -1 }))).await;
    assert!(status.is_client_error());

    let (_, body) = call(&app, Method::GET, "/status", None).await;
    assert_eq!(body["selected_duration_seconds"], 60);
}
