//! Templated prompt composer form.
//!
//! The message-entry surface of the application. Instead of free text, the
//! user picks one value per selector; the choices are interpolated into the
//! fixed prompt template and handed to the submit callback together with
//! the raw selections.

use std::future::Future;

use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::composer::{self, PROMPT_FIELDS};
use crate::ui::components::{
    Button, ButtonSize, ButtonVariant, PlusIcon, Select, SendIcon, Tooltip,
};

/// Prompt composer form.
///
/// Owns one selection per configured field, initialized empty. Submission
/// is enabled only when every selector has a value; the tooltip on the
/// submit control previews the composed prompt as selections change.
///
/// On submit the form prevents the default navigation, composes the prompt,
/// awaits `on_submit(text, selections)` to settlement, clears the external
/// chat-input binding, and resets its own selections. Failures inside the
/// handler are the caller's to deal with; the form neither catches nor
/// retries. Re-entrancy during an in-flight submission is likewise the
/// caller's concern, via `is_loading`.
///
/// The free-text area in the markup is inert: fixed empty value, no input
/// handler, never part of the submitted payload. It still receives the
/// mount-time focus.
#[component]
pub fn PromptForm<F, Fut>(
    /// Called once per submission with the composed prompt text and the raw
    /// per-field selections. Awaited to settlement before the form resets.
    on_submit: F,
    /// External chat-input binding, cleared after each submission.
    set_input: WriteSignal<String>,
    /// Disables the submit control while the caller is busy.
    #[prop(into)]
    is_loading: Signal<bool>,
) -> impl IntoView
where
    F: Fn(String, Vec<String>) -> Fut + Clone + 'static,
    Fut: Future<Output = ()> + 'static,
{
    let (selections, set_selections) = signal(composer::empty_selections());
    let textarea_ref: NodeRef<html::Textarea> = NodeRef::new();

    Effect::new(move |_| {
        if let Some(el) = textarea_ref.get() {
            let _ = el.focus();
        }
    });

    let all_selected = Memo::new(move |_| selections.with(|s| composer::all_selected(s)));
    let preview =
        Signal::derive(move || selections.with(|s| composer::selected_values_preview(s)));

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let values = selections.get_untracked();
        let text = composer::compose_prompt(&values);
        let on_submit = on_submit.clone();
        spawn_local(async move {
            on_submit(text, values).await;
            set_input.set(String::new());
            set_selections.set(composer::empty_selections());
        });
    };

    view! {
        <form on:submit=handle_submit>
            <div class="relative flex max-h-60 w-full grow flex-col overflow-hidden bg-background px-8 sm:rounded-md sm:border sm:border-panelBorder sm:px-12">
                <Tooltip
                    text=Signal::stored("New Chat".to_string())
                    class="absolute left-0 top-4 sm:left-4"
                >
                    <a
                        href="/"
                        class="inline-flex h-8 w-8 items-center justify-center rounded-full \
                               border border-panelBorder bg-background p-0 text-textPrimary \
                               hover:bg-panel"
                    >
                        <PlusIcon />
                        <span class="sr-only">"New Chat"</span>
                    </a>
                </Tooltip>

                <div class="flex space-y-2 pt-4 sm:space-y-0 sm:space-x-2">
                    {PROMPT_FIELDS
                        .iter()
                        .enumerate()
                        .map(|(index, field)| {
                            view! {
                                <div>
                                    <label class="mr-2 text-sm text-textMuted">
                                        {field.label}
                                    </label>
                                    <Select
                                        value=Signal::derive(move || {
                                            selections
                                                .with(|s| s.get(index).cloned().unwrap_or_default())
                                        })
                                        options=field.values
                                        on_change=move |value: String| {
                                            let mut next = selections.get_untracked();
                                            if let Some(slot) = next.get_mut(index) {
                                                *slot = value;
                                            }
                                            set_selections.set(next);
                                        }
                                    />
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                // Inert by design of the shipped form: fixed empty value, no input
                // handler. The submitted payload comes from the selectors only.
                <textarea
                    node_ref=textarea_ref
                    tabindex="0"
                    rows="1"
                    prop:value=""
                    placeholder="Send a message."
                    spellcheck="false"
                    class="min-h-[60px] w-full resize-none bg-transparent px-4 py-[1.3rem] \
                           focus-within:outline-none sm:text-sm"
                />

                <div class="absolute right-0 top-4 sm:right-4">
                    <Tooltip text=preview>
                        <Button
                            variant=ButtonVariant::Primary
                            size=ButtonSize::Icon
                            button_type="submit"
                            disabled=Signal::derive(move || {
                                !all_selected.get() || is_loading.get()
                            })
                        >
                            <SendIcon />
                            <span class="sr-only">"Send message"</span>
                        </Button>
                    </Tooltip>
                </div>
            </div>
        </form>
    }
}
