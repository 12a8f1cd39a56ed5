//! Composer pane header.

use leptos::prelude::*;

use crate::ui::components::{LoaderIcon, SparklesIcon};

/// Header with title and a live status indicator.
#[component]
pub fn ComposerHeader(
    /// Title displayed in the header.
    #[prop(default = "Chat")]
    title: &'static str,
    /// True while a submission is in flight.
    #[prop(into)]
    is_loading: Signal<bool>,
) -> impl IntoView {
    view! {
        <header class="flex items-center justify-between px-4 py-3 border-b border-panelBorder bg-panel/50 backdrop-blur-sm">
            <div class="flex items-center gap-2">
                <SparklesIcon class="h-5 w-5 text-primary" />
                <h2 class="font-semibold text-lg">{title}</h2>
            </div>

            <div class="flex items-center gap-2 text-xs text-textMuted">
                {move || {
                    if is_loading.get() {
                        view! {
                            <LoaderIcon class="h-4 w-4" />
                            <span>"Thinking"</span>
                        }
                            .into_any()
                    } else {
                        view! { <span>"Ready"</span> }.into_any()
                    }
                }}
            </div>
        </header>
    }
}
