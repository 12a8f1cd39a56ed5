//! HTTP server: router, page handler, chat API, SSE endpoint.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use futures::StreamExt;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::AppState;
use crate::stream::{StreamEvent, sse_event};
use crate::ui::app::App;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        // API routes
        .route("/api/chat", post(api_chat))
        .route("/api/chat/stream", get(api_chat_stream))
        .route("/api/sessions", get(api_list_sessions))
        .route("/api/sessions/{id}", get(api_get_session))
        .route("/api/sessions/{id}", axum::routing::delete(api_delete_session))
        .route("/healthz", get(healthz))
        // HTML pages
        .route("/", get(index_handler))
        // Static assets
        .nest_service("/static", ServeDir::new("static"))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ─────────────────────────────────────────────────────────────────────────────
// HTML Page Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// Index page handler: SSR-renders the application shell.
async fn index_handler() -> impl IntoResponse {
    Html(view! { <App /> }.to_html())
}

// ─────────────────────────────────────────────────────────────────────────────
// API Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// Request body for the chat API.
///
/// `prompt` is the composed template string; `selections` carries the raw
/// per-field values the prompt was composed from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Composed prompt text.
    pub prompt: String,
    /// Raw per-field selections, positionally aligned with the selector
    /// configuration.
    #[serde(default)]
    pub selections: Vec<String>,
    /// Optional session ID (creates a new session if not provided).
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Response from the chat API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Session ID for this conversation.
    pub session_id: String,
    /// URL for the SSE stream.
    pub stream_url: String,
}

/// POST /api/chat - Record a composed prompt and return the stream URL.
async fn api_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, (StatusCode, String)> {
    if req.prompt.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "prompt cannot be empty".to_string()));
    }

    tracing::info!(
        name: "chat.request",
        prompt = %req.prompt,
        selections = ?req.selections,
        session_id = ?req.session_id,
        "Received chat request"
    );

    let session = if let Some(id) = &req.session_id {
        tracing::debug!(session_id = %id, "Using existing session");
        state.sessions.get_or_create(id)
    } else {
        let session = state.sessions.create();
        session.set_system_prompt(&state.config.chat.system_prompt);
        tracing::debug!(session_id = %session.id(), "Created new session");
        session
    };

    session.add_user_message(&req.prompt);

    let session_id = session.id().to_string();
    let stream_url = format!("/api/chat/stream?session_id={session_id}");

    tracing::info!(
        name: "chat.accepted",
        session_id = %session_id,
        message_count = session.message_count(),
        "Chat request processed, returning stream URL"
    );

    Ok(Json(ChatResponse {
        session_id,
        stream_url,
    }))
}

/// Query parameters for the stream endpoint.
#[derive(Debug, Deserialize)]
struct StreamQuery {
    /// Session ID.
    session_id: String,
}

/// GET /api/chat/stream - SSE stream of the assistant response.
async fn api_chat_stream(
    State(state): State<AppState>,
    Query(query): Query<StreamQuery>,
) -> Response {
    let Some(session) = state.sessions.get(&query.session_id) else {
        tracing::error!(session_id = %query.session_id, "Session not found");
        return single_error_sse("Session not found");
    };

    let messages = session.messages_with_system();
    let request_id = uuid::Uuid::new_v4().to_string();
    let driver = Arc::clone(&state.driver);

    tracing::info!(
        name: "chat.stream.start",
        session_id = %query.session_id,
        request_id = %request_id,
        message_count = messages.len(),
        "Starting chat stream"
    );

    let sse_stream = async_stream::stream! {
        yield Ok::<String, std::convert::Infallible>(sse_event(&StreamEvent::StreamStart {
            request_id: request_id.clone(),
        }));

        let stream = match driver.stream(messages).await {
            Ok(s) => s,
            Err(e) => {
                tracing::error!(request_id = %request_id, error = %e, "Failed to start chat stream");
                yield Ok(sse_event(&StreamEvent::Error {
                    message: e.to_string(),
                    code: None,
                }));
                yield Ok(sse_event(&StreamEvent::Done));
                return;
            }
        };

        // Accumulate the assistant response so it lands in the session.
        let mut assistant_content = String::new();

        futures::pin_mut!(stream);
        while let Some(event) = stream.next().await {
            match event {
                Ok(event) => {
                    match &event {
                        StreamEvent::MessageDelta { text } => {
                            assistant_content.push_str(text);
                        }
                        StreamEvent::Done => {
                            if !assistant_content.is_empty() {
                                session.add_assistant_message(assistant_content.clone());
                                tracing::info!(
                                    request_id = %request_id,
                                    session_id = %query.session_id,
                                    content_length = assistant_content.len(),
                                    "Saved assistant response to session"
                                );
                            }
                        }
                        _ => {}
                    }
                    yield Ok(sse_event(&event));
                }
                Err(e) => {
                    tracing::error!(request_id = %request_id, error = %e, "Stream error");
                    yield Ok(sse_event(&StreamEvent::Error {
                        message: e.to_string(),
                        code: None,
                    }));
                    yield Ok(sse_event(&StreamEvent::Done));
                    return;
                }
            }
        }
    };

    let body = axum::body::Body::from_stream(sse_stream);
    build_sse_response(body)
}

/// Session info for listing.
#[derive(Debug, Serialize)]
struct SessionInfo {
    id: String,
    message_count: usize,
    created_at: String,
}

impl SessionInfo {
    fn from_session(session: &crate::session::Session) -> Self {
        Self {
            id: session.id().to_string(),
            message_count: session.message_count(),
            created_at: session.created_at().to_rfc3339(),
        }
    }
}

/// GET /api/sessions - List all sessions.
async fn api_list_sessions(State(state): State<AppState>) -> Json<Vec<SessionInfo>> {
    let sessions: Vec<SessionInfo> = state
        .sessions
        .list_ids()
        .iter()
        .filter_map(|id| state.sessions.get(id))
        .map(|s| SessionInfo::from_session(&s))
        .collect();

    Json(sessions)
}

/// GET /api/sessions/:id - Get session details.
async fn api_get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionInfo>, StatusCode> {
    match state.sessions.get(&id) {
        Some(session) => Ok(Json(SessionInfo::from_session(&session))),
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// DELETE /api/sessions/:id - Delete a session.
async fn api_delete_session(State(state): State<AppState>, Path(id): Path<String>) -> StatusCode {
    match state.sessions.remove(&id) {
        Some(_) => StatusCode::NO_CONTENT,
        None => StatusCode::NOT_FOUND,
    }
}

/// GET /healthz - Liveness probe.
async fn healthz() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn single_error_sse(message: &str) -> Response {
    let err = StreamEvent::Error {
        message: message.to_string(),
        code: None,
    };

    let payload = format!("{}{}", sse_event(&err), sse_event(&StreamEvent::Done));
    build_sse_response(axum::body::Body::from(payload))
}

fn build_sse_response(body: axum::body::Body) -> Response {
    let mut resp = Response::new(body);
    let h = resp.headers_mut();
    h.insert("Content-Type", "text/event-stream".parse().unwrap());
    h.insert("Cache-Control", "no-cache".parse().unwrap());
    h.insert("Connection", "keep-alive".parse().unwrap());
    h.insert("X-Accel-Buffering", "no".parse().unwrap());
    resp
}
