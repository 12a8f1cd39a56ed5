//! Chat pipeline client.
//!
//! This module provides the connection settings, message types, and
//! streaming driver for an OpenAI-compatible Chat Completions endpoint.
//! The composer application sends plain text prompts and relays plain text
//! responses; there is no tool loop and no multimodal content.
//!
//! # Overview
//!
//! - [`LlmSettings`]: connection and model configuration
//! - [`Message`] / [`MessageRole`]: conversation entries
//! - [`ChatCompletionsDriver`]: streams responses as [`StreamEvent`]s
//!
//! [`StreamEvent`]: crate::stream::StreamEvent

mod chat_completions;

pub use chat_completions::ChatCompletionsDriver;

use serde::{Deserialize, Serialize};

/// LLM connection and model settings.
#[derive(Debug, Clone)]
pub struct LlmSettings {
    /// Base URL for the LLM API (e.g., `https://api.openai.com`).
    pub base_url: String,
    /// Optional API key for authentication.
    pub api_key: Option<String>,
    /// Model identifier (e.g., `gpt-4o`, `claude-3-opus`).
    pub model: String,
}

/// A message in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Role of the message author.
    pub role: MessageRole,
    /// Text content of the message.
    pub content: String,
}

impl Message {
    /// Create a user message.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    /// Create an assistant message.
    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }

    /// Create a system message.
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }
}

/// Role of a conversation message author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// System instructions.
    System,
    /// End-user input.
    User,
    /// Model output.
    Assistant,
}

/// Errors produced by the chat pipeline client.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// Transport-level failure talking to the endpoint.
    #[error("chat endpoint request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A streamed SSE frame contained malformed JSON.
    #[error("malformed stream frame: {0}")]
    Frame(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_constructors() {
        assert_eq!(Message::user("hi").role, MessageRole::User);
        assert_eq!(Message::assistant("ok").role, MessageRole::Assistant);
        assert_eq!(Message::system("be brief").role, MessageRole::System);
    }

    #[test]
    fn test_role_serialization_is_lowercase() {
        let json = serde_json::to_string(&Message::user("hi")).unwrap();
        assert!(json.contains(r#""role":"user""#));
    }
}
