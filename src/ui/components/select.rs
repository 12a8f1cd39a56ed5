//! Controlled native select component.

use leptos::prelude::*;

/// Native `<select>` wrapped in the shared form styling.
///
/// Offers a placeholder entry (empty value) followed by the configured
/// values. The current value is controlled by the caller; changes are
/// reported through `on_change` with the newly selected value, which is the
/// empty string when the placeholder is re-selected.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Select
///         value=Signal::derive(move || selected.get())
///         options=&["Value 1", "Value 2"]
///         placeholder="Select an option"
///         on_change=move |value| set_selected.set(value)
///     />
/// }
/// ```
#[component]
pub fn Select(
    /// Current selected value ("" when unselected).
    #[prop(into)]
    value: Signal<String>,
    /// Values offered by the selector, in display order.
    options: &'static [&'static str],
    /// Label of the placeholder entry.
    #[prop(default = "Select an option")]
    placeholder: &'static str,
    /// Called with the new value whenever the selection changes.
    on_change: impl Fn(String) + 'static,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let base_classes = "h-9 rounded-md border border-panelBorder bg-background px-2 py-1 \
                        text-sm text-textPrimary focus-visible:outline-none \
                        focus-visible:ring-2 focus-visible:ring-primary";

    let classes = format!("{base_classes} {class}");

    view! {
        <select
            class=classes
            prop:value=move || value.get()
            on:change=move |ev| on_change(event_target_value(&ev))
        >
            <option value="">{placeholder}</option>
            {options
                .iter()
                .map(|option| {
                    let option = *option;
                    view! {
                        <option value=option selected=move || value.get() == option>
                            {option}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}
