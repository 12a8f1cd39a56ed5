//! Templated prompt composer chat application.
//!
//! A chat application whose message-entry surface is a set of dropdown
//! selectors: the chosen values are interpolated into a fixed prompt
//! template and submitted to a streaming chat pipeline.
//!
//! # Architecture
//!
//! - **Server**: Axum-based HTTP server with SSE streaming
//! - **Composer**: pure prompt-composition core (template, preview, gate)
//! - **LLM**: Chat Completions streaming driver
//! - **UI**: Leptos SSR components
//!
//! # Modules
//!
//! - [`composer`]: selector configuration and prompt composition
//! - [`llm`]: chat pipeline client
//! - [`session`]: conversation and session management
//! - [`stream`]: normalized streaming events and SSE encoding
//! - [`ui`]: Leptos components

pub mod composer;
pub mod config;
pub mod llm;
pub mod server;
pub mod session;
pub mod stream;
pub mod ui;

use std::sync::Arc;

use crate::config::AppConfig;
use crate::llm::{ChatCompletionsDriver, LlmSettings};
use crate::session::SessionStore;

/// Application state shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Streaming chat driver.
    pub driver: Arc<ChatCompletionsDriver>,
    /// Session store for conversation management.
    pub sessions: SessionStore,
    /// Global configuration.
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Assemble the application state from loaded configuration.
    #[must_use]
    pub fn new(config: AppConfig, settings: LlmSettings) -> Self {
        Self {
            driver: Arc::new(ChatCompletionsDriver::new(settings)),
            sessions: SessionStore::new(),
            config: Arc::new(config),
        }
    }
}
