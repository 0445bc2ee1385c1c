//! HTTP surface tests driven through the router

mod common;

use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use rep_timer::{create_router, services::MemoryStore, tasks::load_exercise_task};

use common::{harness, harness_with_store, push_up};

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn health_reports_ok() {
    let app = create_router(harness(60, 10).state);

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn status_lists_options_and_clock() {
    let app = create_router(harness(90, 10).state);

    let (status, body) = send(&app, "GET", "/timer", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["clock"], "01:30");
    assert_eq!(body["timer"]["phase"], "idle");
    assert_eq!(body["timer"]["remaining_seconds"], 90);
    assert_eq!(body["exercise_id"], "7");

    let options = body["duration_options"].as_array().unwrap();
    let labels: Vec<&str> = options.iter().map(|o| o["label"].as_str().unwrap()).collect();
    assert_eq!(labels, ["00:30", "01:00", "01:30", "02:00", "03:00"]);
    let selected: Vec<u64> = options
        .iter()
        .filter(|o| o["selected"] == true)
        .map(|o| o["seconds"].as_u64().unwrap())
        .collect();
    assert_eq!(selected, [90]);
    assert_eq!(body["repetition_options"], json!([5, 10, 15, 20, 25, 30]));
}

#[tokio::test]
async fn configure_validates_option_sets() {
    let app = create_router(harness(60, 10).state);

    let (status, body) = send(
        &app,
        "POST",
        "/timer/configure",
        Some(json!({"duration_seconds": 45, "repetitions": 10})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["status"], "error");

    let (status, body) = send(
        &app,
        "POST",
        "/timer/configure",
        Some(json!({"duration_seconds": 120, "repetitions": 20})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["clock"], "02:00");
    assert_eq!(body["timer"]["repetitions"], 20);
}

#[tokio::test(start_paused = true)]
async fn start_stop_reset_cycle() {
    let h = harness(60, 10);
    let app = create_router(h.state.clone());

    let (status, body) = send(&app, "POST", "/timer/start", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "running");

    let (status, _) = send(&app, "POST", "/timer/start", None).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = send(
        &app,
        "POST",
        "/timer/configure",
        Some(json!({"duration_seconds": 30, "repetitions": 5})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    tokio::time::sleep(Duration::from_millis(3500)).await;

    let (status, body) = send(&app, "POST", "/timer/stop", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "idle");
    assert_eq!(body["clock"], "00:57");

    let (status, _) = send(&app, "POST", "/timer/stop", None).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) = send(&app, "POST", "/timer/reset", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["timer"]["remaining_seconds"], 60);

    let (_, body) = send(&app, "GET", "/timer", None).await;
    assert_eq!(body["last_action"], "reset");
    assert_eq!(h.store.logs().len(), 1);
}

#[tokio::test]
async fn exercise_view_moves_from_loading_to_loaded() {
    let h = harness_with_store(60, 10, MemoryStore::with_exercises([push_up()]));
    let app = create_router(h.state.clone());

    let (_, body) = send(&app, "GET", "/exercise", None).await;
    assert_eq!(body, json!({"status": "loading"}));

    load_exercise_task(h.state.clone()).await;

    let (status, body) = send(&app, "GET", "/exercise", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "loaded");
    assert_eq!(body["exercise"]["name"], "Push-up");
    assert_eq!(body["exercise"]["recommended_reps"], 15);
    assert!(body["exercise"].get("reps").is_none());
}
