//! Streaming event model for chat responses.
//!
//! Defines the normalized events the server emits while relaying an
//! assistant response, plus the SSE encoding used on the wire. The composer
//! application only ever streams plain text, so the model is deliberately
//! small: lifecycle, text deltas, errors.
//!
//! # Example
//!
//! ```rust
//! use prompt_composer::stream::{StreamEvent, sse_event};
//!
//! let event = StreamEvent::MessageDelta {
//!     text: "Hello".to_string(),
//! };
//! let sse = sse_event(&event);
//! assert!(sse.contains("message.delta"));
//! ```

use serde::{Deserialize, Serialize};

/// Normalized streaming events emitted while relaying a chat response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "data")]
pub enum StreamEvent {
    /// Indicates the start of a new streaming response.
    #[serde(rename = "stream.start")]
    StreamStart {
        /// Unique identifier for this request/response pair.
        request_id: String,
    },

    /// Incremental text delta from the assistant's response.
    #[serde(rename = "message.delta")]
    MessageDelta {
        /// The text fragment to append.
        text: String,
    },

    /// An error occurred during streaming.
    #[serde(rename = "error")]
    Error {
        /// Error message.
        message: String,
        /// Optional error code for programmatic handling.
        #[serde(skip_serializing_if = "Option::is_none")]
        code: Option<String>,
    },

    /// Stream has completed successfully.
    #[serde(rename = "done")]
    Done,
}

/// Convert a [`StreamEvent`] to an SSE-formatted string.
///
/// The output follows the Server-Sent Events specification with both an
/// `event:` line (for `EventSource` listeners) and a `data:` line containing
/// the JSON payload.
///
/// # Example
///
/// ```rust
/// use prompt_composer::stream::{StreamEvent, sse_event};
///
/// let sse = sse_event(&StreamEvent::Done);
/// assert!(sse.contains("event: done"));
/// ```
pub fn sse_event(evt: &StreamEvent) -> String {
    let json = serde_json::to_string(evt).unwrap_or_else(|e| {
        serde_json::json!({ "type": "error", "data": { "message": e.to_string() } }).to_string()
    });

    format!("event: {}\ndata: {json}\n\n", event_name(evt))
}

/// Get the SSE event name for a [`StreamEvent`].
#[must_use]
pub fn event_name(evt: &StreamEvent) -> &'static str {
    match evt {
        StreamEvent::StreamStart { .. } => "stream.start",
        StreamEvent::MessageDelta { .. } => "message.delta",
        StreamEvent::Error { .. } => "error",
        StreamEvent::Done => "done",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_delta_serialization() {
        let event = StreamEvent::MessageDelta {
            text: "Hello".to_string(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("message.delta"));
        assert!(json.contains("Hello"));
    }

    #[test]
    fn test_sse_event_format() {
        let sse = sse_event(&StreamEvent::Done);
        assert!(sse.starts_with("event: done\n"));
        assert!(sse.contains("data: "));
        assert!(sse.ends_with("\n\n"));
    }

    #[test]
    fn test_error_event_skips_missing_code() {
        let event = StreamEvent::Error {
            message: "boom".to_string(),
            code: None,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("boom"));
        assert!(!json.contains("code"));
    }

    #[test]
    fn test_event_roundtrip() {
        let event = StreamEvent::StreamStart {
            request_id: "req-123".to_string(),
        };
        let json = serde_json::to_string(&event).unwrap();
        let parsed: StreamEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, event);
    }
}
