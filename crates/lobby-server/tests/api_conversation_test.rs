use axum::body::Body;
use axum::http::{Request, StatusCode};
use lobby_server::{app, config::Config, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn post_conversation(body: &str) -> (StatusCode, Value) {
    let response = app(AppState::new(Config::default()))
        .oneshot(
            Request::builder()
                .uri("/api/save-conversation")
                .method("POST")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn echoes_log_back_unchanged() {
    let log = json!([
        {"role": "user", "text": "hi"},
        {"role": "agent", "text": "hello, how can I help?"}
    ]);
    let body = json!({ "log": log }).to_string();

    let (status, response) = post_conversation(&body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["status"], "success");
    assert_eq!(response["conversation_log"], log);
    assert_eq!(response["message"], "Conversation saved successfully");
}

#[tokio::test]
async fn missing_log_field_defaults_to_empty() {
    let (status, response) = post_conversation("{}").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["status"], "success");
    assert_eq!(response["conversation_log"], json!([]));
}

#[tokio::test]
async fn opaque_message_records_pass_through() {
    // Messages are not validated or interpreted; arbitrary shapes survive.
    let log = json!([{"deeply": {"nested": [1, 2, 3]}}, "bare string", 42]);
    let body = json!({ "log": log, "extra": "ignored" }).to_string();

    let (status, response) = post_conversation(&body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["conversation_log"], log);
}

#[tokio::test]
async fn invalid_json_body_is_a_server_error() {
    let (status, response) = post_conversation("not json at all").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response["status"], "error");
    assert!(response["error"].as_str().unwrap().contains("invalid JSON"));
}

#[tokio::test]
async fn non_object_body_is_a_server_error() {
    let (status, response) = post_conversation("[1, 2, 3]").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response["status"], "error");
}

#[tokio::test]
async fn non_array_log_is_a_server_error() {
    let (status, response) = post_conversation(r#"{"log": "hello"}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response["status"], "error");

    let (status, response) = post_conversation(r#"{"log": null}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response["status"], "error");
}
