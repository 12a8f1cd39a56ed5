use axum_test::TestServer;

use prompt_composer::AppState;
use prompt_composer::config::{AppConfig, ChatConfig, ServerConfig};
use prompt_composer::llm::LlmSettings;
use prompt_composer::server::{ChatRequest, ChatResponse, router};

fn test_state() -> AppState {
    let config = AppConfig {
        server: ServerConfig {
            port: 0,
            host: "127.0.0.1".to_string(),
        },
        chat: ChatConfig {
            system_prompt: "You are a helpful assistant.".to_string(),
            session_timeout_minutes: 30,
        },
    };
    // The driver is never exercised by these tests; the endpoint is a
    // closed port on purpose.
    let settings = LlmSettings {
        base_url: "http://127.0.0.1:9".to_string(),
        api_key: None,
        model: "test-model".to_string(),
    };
    AppState::new(config, settings)
}

fn test_server(state: AppState) -> TestServer {
    TestServer::new(router(state)).expect("test server should start")
}

#[tokio::test]
async fn test_index_serves_composer_markup() {
    let server = test_server(test_state());

    let response = server.get("/").await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("Dropdown 1"));
    assert!(html.contains("Dropdown 3"));
    assert!(html.contains("Select an option"));
    assert!(html.contains("Send a message."));
}

#[tokio::test]
async fn test_healthz() {
    let server = test_server(test_state());

    let response = server.get("/healthz").await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>(),
        serde_json::json!({ "status": "ok" })
    );
}

#[tokio::test]
async fn test_chat_request_creates_session_with_prompt() {
    let state = test_state();
    let server = test_server(state.clone());

    let request = ChatRequest {
        prompt: "hello Value 2 iam rohan Option 1 and Choice C".to_string(),
        selections: vec![
            "Value 2".to_string(),
            "Option 1".to_string(),
            "Choice C".to_string(),
        ],
        session_id: None,
    };

    let response = server.post("/api/chat").json(&request).await;
    response.assert_status_ok();

    let body = response.json::<ChatResponse>();
    assert!(body.stream_url.contains(&body.session_id));

    let session = state
        .sessions
        .get(&body.session_id)
        .expect("session should exist");
    assert_eq!(session.message_count(), 1);
    assert_eq!(
        session.messages()[0].content,
        "hello Value 2 iam rohan Option 1 and Choice C"
    );
    assert_eq!(
        session.system_prompt().as_deref(),
        Some("You are a helpful assistant.")
    );
}

#[tokio::test]
async fn test_chat_request_rejects_empty_prompt() {
    let server = test_server(test_state());

    let request = ChatRequest {
        prompt: "   ".to_string(),
        selections: Vec::new(),
        session_id: None,
    };

    let response = server.post("/api/chat").json(&request).await;
    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_chat_request_reuses_session() {
    let state = test_state();
    let server = test_server(state.clone());

    let first = ChatRequest {
        prompt: "hello Value 1 iam rohan Option 2 and Choice A".to_string(),
        selections: vec![
            "Value 1".to_string(),
            "Option 2".to_string(),
            "Choice A".to_string(),
        ],
        session_id: None,
    };
    let body = server.post("/api/chat").json(&first).await.json::<ChatResponse>();

    let second = ChatRequest {
        session_id: Some(body.session_id.clone()),
        ..first
    };
    let reused = server.post("/api/chat").json(&second).await.json::<ChatResponse>();

    assert_eq!(reused.session_id, body.session_id);
    let session = state
        .sessions
        .get(&body.session_id)
        .expect("session should exist");
    assert_eq!(session.message_count(), 2);
}

#[tokio::test]
async fn test_session_listing_and_deletion() {
    let state = test_state();
    let server = test_server(state.clone());

    let request = ChatRequest {
        prompt: "hello Value 3 iam rohan Option 4 and Choice B".to_string(),
        selections: vec![
            "Value 3".to_string(),
            "Option 4".to_string(),
            "Choice B".to_string(),
        ],
        session_id: None,
    };
    let body = server.post("/api/chat").json(&request).await.json::<ChatResponse>();

    let listed = server.get("/api/sessions").await.json::<serde_json::Value>();
    assert_eq!(listed.as_array().map(Vec::len), Some(1));

    let url = format!("/api/sessions/{}", body.session_id);
    server.get(&url).await.assert_status_ok();

    server.delete(&url).await.assert_status(axum::http::StatusCode::NO_CONTENT);
    server.get(&url).await.assert_status_not_found();
    assert!(state.sessions.is_empty());
}

#[tokio::test]
async fn test_stream_for_unknown_session_reports_error() {
    let server = test_server(test_state());

    let response = server.get("/api/chat/stream?session_id=missing").await;
    response.assert_status_ok();
    assert_eq!(
        response.header("content-type"),
        "text/event-stream".parse::<axum::http::HeaderValue>().unwrap()
    );

    let text = response.text();
    assert!(text.contains("event: error"));
    assert!(text.contains("Session not found"));
    assert!(text.contains("event: done"));
}
