// tests/api_http.rs
//
// HTTP-level tests for the scoring Router without opening sockets.
// We exercise the router directly via tower::ServiceExt::oneshot.
//
// Covered:
// - GET  /health
// - POST /smartphones/evaluate          (200 + JSON contract, 422 on invalid input)
// - POST /smartphones/evaluate/batch
// - GET  /smartphones/samples

use axum::{
    body::{self, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::json;
use serde_json::Value as Json;
use tower::ServiceExt as _; // for `oneshot`

use phone_score::api::{self, AppState};

const BODY_LIMIT: usize = 1024 * 1024;

fn test_router() -> Router {
    api::router(AppState::default())
}

fn post_json(uri: &str, payload: &Json) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .expect("build POST request")
}

async fn read_json(resp: axum::response::Response) -> Json {
    let bytes = body::to_bytes(resp.into_body(), BODY_LIMIT)
        .await
        .expect("read body")
        .to_vec();
    serde_json::from_slice(&bytes).expect("parse json")
}

#[tokio::test]
async fn health_returns_ok() {
    let req = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .expect("build GET /health");

    let resp = test_router().oneshot(req).await.expect("oneshot /health");
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = body::to_bytes(resp.into_body(), BODY_LIMIT)
        .await
        .expect("read body")
        .to_vec();
    assert_eq!(String::from_utf8(bytes).expect("utf8").trim(), "OK");
}

#[tokio::test]
async fn evaluate_returns_full_evaluation() {
    let payload = json!({
        "internal_storage": 256,
        "storage_ram": 8,
        "expandable_storage": 1,
        "primary_camera": "108MP + 12MP + 5MP + 5MP",
        "display": "Full HD+ Dynamic AMOLED 2X DisplayHD",
        "network": "5G, 4G, 3G, 2G",
        "battery": "5000 mAh"
    });

    let resp = test_router()
        .oneshot(post_json("/smartphones/evaluate", &payload))
        .await
        .expect("oneshot /smartphones/evaluate");
    assert_eq!(resp.status(), StatusCode::OK);

    let v = read_json(resp).await;
    assert!(v["id"].as_str().is_some_and(|id| !id.is_empty()), "missing id");
    assert_eq!(v["overall_score"], json!(70));
    assert_eq!(v["performance_category"], json!("MID"));
    assert_eq!(
        v["user_recommendation"],
        json!("Perfect for users requiring long battery life")
    );
    assert_eq!(v["battery"], json!("5000 mAh"), "input echoed as submitted");
    assert_eq!(v["primary_camera"], json!("108MP + 12MP + 5MP + 5MP"));
    for key in [
        "gaming_potential",
        "battery_performance",
        "photography",
        "display_quality",
    ] {
        assert!(v["metrics"][key].is_u64(), "metrics.{key} missing");
    }
}

#[tokio::test]
async fn evaluate_rejects_non_positive_ram() {
    let payload = json!({
        "internal_storage": 128,
        "storage_ram": 0,
        "expandable_storage": "NA",
        "primary_camera": "12MP",
        "display": "LCD",
        "network": "4G",
        "battery": 4000
    });

    let resp = test_router()
        .oneshot(post_json("/smartphones/evaluate", &payload))
        .await
        .expect("oneshot");
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let v = read_json(resp).await;
    assert_eq!(v["field"], json!("storage_ram"));
}

#[tokio::test]
async fn evaluate_rejects_missing_fields() {
    let payload = json!({ "internal_storage": 128 });
    let resp = test_router()
        .oneshot(post_json("/smartphones/evaluate", &payload))
        .await
        .expect("oneshot");
    assert!(resp.status().is_client_error(), "got {}", resp.status());
}

#[tokio::test]
async fn batch_keeps_input_order() {
    let samples = serde_json::to_value(phone_score::samples::builtin()).expect("samples json");

    let resp = test_router()
        .oneshot(post_json("/smartphones/evaluate/batch", &samples))
        .await
        .expect("oneshot batch");
    assert_eq!(resp.status(), StatusCode::OK);

    let v = read_json(resp).await;
    let arr = v.as_array().expect("batch response must be an array");
    let scores: Vec<u64> = arr
        .iter()
        .map(|e| e["overall_score"].as_u64().expect("score"))
        .collect();
    assert_eq!(scores, vec![70, 55, 69]);
}

#[tokio::test]
async fn batch_reports_index_of_invalid_item() {
    let mut samples = serde_json::to_value(phone_score::samples::builtin()).expect("json");
    samples[2]["display"] = json!("");

    let resp = test_router()
        .oneshot(post_json("/smartphones/evaluate/batch", &samples))
        .await
        .expect("oneshot batch");
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let v = read_json(resp).await;
    assert_eq!(v["index"], json!(2));
    assert_eq!(v["field"], json!("display"));
}

#[tokio::test]
async fn samples_lists_builtin_specs() {
    let req = Request::builder()
        .method("GET")
        .uri("/smartphones/samples")
        .body(Body::empty())
        .expect("build GET /smartphones/samples");

    let resp = test_router().oneshot(req).await.expect("oneshot samples");
    assert_eq!(resp.status(), StatusCode::OK);

    let v = read_json(resp).await;
    let arr = v.as_array().expect("array");
    assert_eq!(arr.len(), 3);
    assert_eq!(arr[1]["expandable_storage"], json!("NA"));
    assert_eq!(arr[0]["internal_storage"], json!(256));
    assert_eq!(arr[0]["storage_ram"], json!(8));
    assert_eq!(arr[0]["expandable_storage"], json!(1));
    assert_eq!(arr[0]["battery"], json!(5000));
}
