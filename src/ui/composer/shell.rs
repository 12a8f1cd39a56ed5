//! Composer shell layout and state wiring.

use leptos::prelude::*;

use crate::server::{ChatRequest, ChatResponse};

use super::{ComposerHeader, PromptForm};

/// Main composer shell.
///
/// Owns the state the form treats as external: the chat-input binding, the
/// in-flight flag, and the submit handler that forwards composed prompts to
/// the chat API. Assistant output is rendered by the `<chat-stream>` Web
/// Component, which consumes the SSE endpoint on the client side.
#[component]
pub fn ComposerShell(
    /// Title displayed in the header.
    #[prop(default = "Chat")]
    title: &'static str,
    /// Chat API endpoint the submit handler posts to.
    #[prop(default = "/api/chat")]
    chat_url: &'static str,
    /// SSE stream URL for assistant output.
    #[prop(default = "/api/chat/stream")]
    stream_url: &'static str,
) -> impl IntoView {
    // The chat-input binding lives here, outside the form; the form only
    // ever clears it.
    let (_input, set_input) = signal(String::new());
    let (is_loading, set_is_loading) = signal(false);
    let (session_id, set_session_id) = signal(Option::<String>::None);

    let submit = move |prompt: String, selections: Vec<String>| async move {
        set_is_loading.set(true);
        match send_prompt(chat_url, prompt, selections, session_id.get_untracked()).await {
            Ok(resp) => set_session_id.set(Some(resp.session_id)),
            Err(err) => tracing::error!(error = %err, "chat submission failed"),
        }
        set_is_loading.set(false);
    };

    view! {
        <div class="chat-shell flex h-[calc(100vh-6rem)] flex-col overflow-hidden rounded-2xl border border-panelBorder bg-panel">
            <ComposerHeader title=title is_loading=is_loading />

            <div class="flex-1 overflow-hidden">
                // The chat-stream Web Component handles SSE streaming and rendering.
                <chat-stream
                    class="block h-full"
                    stream-url=stream_url
                    session-id=move || session_id.get().unwrap_or_default()
                    aria-live="polite"
                    aria-label="Chat messages"
                />
            </div>

            <div class="border-t border-panelBorder bg-panel/50 p-4 backdrop-blur-sm">
                <PromptForm on_submit=submit set_input=set_input is_loading=is_loading />
                <p class="mt-2 text-center text-xs text-textMuted">
                    "Pick a value in every selector, then send"
                </p>
            </div>
        </div>
    }
}

/// Forward a composed prompt to the chat API.
async fn send_prompt(
    chat_url: &str,
    prompt: String,
    selections: Vec<String>,
    session_id: Option<String>,
) -> Result<ChatResponse, reqwest::Error> {
    let request = ChatRequest {
        prompt,
        selections,
        session_id,
    };

    reqwest::Client::new()
        .post(chat_url)
        .json(&request)
        .send()
        .await?
        .error_for_status()?
        .json::<ChatResponse>()
        .await
}
