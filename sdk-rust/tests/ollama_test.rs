mod common;
use crate::common::{captured, spawn_server, Captured};
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use content_sdk::{
    ollama::{OllamaModel, OllamaModelOptions},
    LanguageModel, LanguageModelError, LanguageModelInput,
};
use serde_json::{json, Value};
use std::time::Duration;

async fn generate_handler(State(requests): State<Captured>, Json(body): Json<Value>) -> Json<Value> {
    requests.lock().expect("lock").push(body);
    Json(json!({
        "model": "llama3.1",
        "response": "# Local Title\nGenerated locally.",
        "done": true,
        "prompt_eval_count": 10,
        "eval_count": 6
    }))
}

async fn tags_handler() -> Json<Value> {
    Json(json!({ "models": [{ "name": "llama3.1:latest" }] }))
}

fn model(base_url: String, timeout: Option<Duration>) -> OllamaModel {
    OllamaModel::new(
        "llama3.1",
        OllamaModelOptions {
            base_url: Some(base_url),
            timeout,
            ..Default::default()
        },
    )
}

#[tokio::test]
async fn generates_text_with_a_non_streaming_request() {
    let requests = captured();
    let router = Router::new()
        .route("/api/generate", post(generate_handler))
        .route("/api/tags", get(tags_handler))
        .with_state(requests.clone());
    let base_url = spawn_server(router).await;

    let response = model(base_url, None)
        .generate(LanguageModelInput::new("Write a haiku"))
        .await
        .expect("generate succeeds");

    assert_eq!(response.text, "# Local Title\nGenerated locally.");
    assert_eq!(response.usage.map(|u| u.output_tokens), Some(6));

    let requests = requests.lock().expect("lock").clone();
    assert_eq!(
        requests,
        vec![json!({ "model": "llama3.1", "prompt": "Write a haiku", "stream": false })]
    );
}

#[tokio::test]
async fn reports_availability_from_tags_endpoint() {
    let router = Router::new().route("/api/tags", get(tags_handler));
    let base_url = spawn_server(router).await;
    let model = model(base_url, None);

    model.check_availability().await.expect("available");
    assert_eq!(
        model.list_local_models().await.expect("tags"),
        vec!["llama3.1:latest".to_string()]
    );
}

#[tokio::test]
async fn surfaces_status_errors() {
    let router = Router::new().route(
        "/api/generate",
        post(|| async { (StatusCode::NOT_FOUND, "model 'llama3.1' not found") }),
    );
    let base_url = spawn_server(router).await;

    let error = model(base_url, None)
        .generate(LanguageModelInput::new("Hello"))
        .await
        .expect_err("generate fails");

    match error {
        LanguageModelError::StatusCode(status, body) => {
            assert_eq!(status.as_u16(), 404);
            assert!(body.contains("not found"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn times_out_as_a_transport_error() {
    let router = Router::new().route(
        "/api/generate",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(2)).await;
            Json(json!({ "response": "late", "done": true }))
        }),
    );
    let base_url = spawn_server(router).await;

    let error = model(base_url, Some(Duration::from_millis(100)))
        .generate(LanguageModelInput::new("Hello"))
        .await
        .expect_err("generate times out");

    assert!(matches!(error, LanguageModelError::Transport(ref e) if e.is_timeout()));
}

#[tokio::test]
async fn unreachable_daemon_is_unavailable() {
    // Nothing listens on port 9 locally.
    let model = model("http://127.0.0.1:9".to_string(), Some(Duration::from_secs(2)));

    let error = model.check_availability().await.expect_err("unavailable");
    assert!(matches!(error, LanguageModelError::Unavailable("ollama", _)));
}
