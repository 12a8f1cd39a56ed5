//! Hover tooltip component.

use leptos::prelude::*;

/// CSS-only tooltip shown above its trigger on hover.
///
/// The text is a signal so callers can surface live values (the composer
/// uses this for the prompt preview next to the submit control).
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Tooltip text=Signal::stored("New Chat".to_string())>
///         <a href="/">"+"</a>
///     </Tooltip>
/// }
/// ```
#[component]
pub fn Tooltip(
    /// Text shown in the floating bubble.
    #[prop(into)]
    text: Signal<String>,
    /// Additional CSS classes on the wrapper.
    #[prop(default = "")]
    class: &'static str,
    /// The trigger element.
    children: Children,
) -> impl IntoView {
    let wrapper_classes = format!("group/tooltip relative inline-flex {class}");

    view! {
        <span class=wrapper_classes>
            {children()}
            <span
                role="tooltip"
                class="pointer-events-none absolute bottom-full left-1/2 z-50 mb-2 \
                       -translate-x-1/2 whitespace-nowrap rounded-md border border-panelBorder \
                       bg-panel px-3 py-1.5 text-xs text-textPrimary opacity-0 shadow-md \
                       transition-opacity group-hover/tooltip:opacity-100"
            >
                {move || text.get()}
            </span>
        </span>
    }
}
