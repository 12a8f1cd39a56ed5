//! Prompt composition core.
//!
//! This module owns the static selector configuration and the pure functions
//! that turn a set of dropdown selections into the templated prompt string
//! submitted to the chat pipeline. Keeping these free of any UI types lets
//! the observable contract be tested without rendering anything.
//!
//! # Overview
//!
//! - [`PROMPT_FIELDS`]: the fixed, process-wide selector configuration
//! - [`compose_prompt`]: selections → templated prompt text
//! - [`selected_values_preview`]: re-validated, compacted preview string
//! - [`all_selected`]: submission gate predicate
//!
//! # Example
//!
//! ```rust
//! use prompt_composer::composer::{compose_prompt, empty_selections};
//!
//! let mut selections = empty_selections();
//! selections[0] = "Value 2".to_string();
//! assert_eq!(compose_prompt(&selections), "hello Value 2 iam rohan  and ");
//! ```

/// A single selector: a label and the values it offers.
///
/// The configuration is read-only and defined at compile time; there is no
/// lifecycle beyond process start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptField {
    /// Label rendered next to the selector.
    pub label: &'static str,
    /// The values the selector offers, in display order.
    pub values: &'static [&'static str],
}

/// The shipped selector configuration.
///
/// The prompt template interpolates the first three selections; additional
/// fields would still be rendered and submitted in the raw selections
/// vector, but never reach the template.
pub const PROMPT_FIELDS: &[PromptField] = &[
    PromptField {
        label: "Dropdown 1",
        values: &["Value 1", "Value 2", "Value 3"],
    },
    PromptField {
        label: "Dropdown 2",
        values: &["Option 1", "Option 2", "Option 3", "Option 4"],
    },
    PromptField {
        label: "Dropdown 3",
        values: &["Choice A", "Choice B", "Choice C"],
    },
];

/// Create the initial selection state: one empty entry per configured field.
#[must_use]
pub fn empty_selections() -> Vec<String> {
    vec![String::new(); PROMPT_FIELDS.len()]
}

/// True iff every selector has a non-empty selection.
///
/// This gates the submit control only; partial selections can still be
/// previewed.
#[must_use]
pub fn all_selected(selections: &[String]) -> bool {
    selections.iter().all(|value| !value.is_empty())
}

/// Build the prompt text from the current selections.
///
/// The template is fixed at three interpolation slots regardless of how many
/// fields are configured. Missing entries interpolate as the empty string;
/// entries past the third are ignored.
#[must_use]
pub fn compose_prompt(selections: &[String]) -> String {
    let slot = |index: usize| selections.get(index).map_or("", String::as_str);
    format!(
        "hello {} iam rohan {} and {}",
        slot(0),
        slot(1),
        slot(2)
    )
}

/// Build the preview string shown next to the submit control.
///
/// Each selection is re-checked for membership in its field's value set;
/// empty or unknown values are dropped and the remaining values are
/// compacted to the left before being passed through [`compose_prompt`].
/// Purely informational — this never gates submission.
#[must_use]
pub fn selected_values_preview(selections: &[String]) -> String {
    let matched: Vec<String> = selections
        .iter()
        .enumerate()
        .filter_map(|(index, value)| {
            let field = PROMPT_FIELDS.get(index)?;
            if value.is_empty() {
                return None;
            }
            field
                .values
                .iter()
                .find(|candidate| **candidate == value.as_str())
                .map(|candidate| (*candidate).to_string())
        })
        .collect();

    compose_prompt(&matched)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selections(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn test_initial_selections_are_empty() {
        let initial = empty_selections();
        assert_eq!(initial.len(), PROMPT_FIELDS.len());
        assert!(initial.iter().all(String::is_empty));
        assert!(!all_selected(&initial));
    }

    #[test]
    fn test_all_selected_requires_every_entry() {
        assert!(!all_selected(&selections(&["Value 1", "", "Choice A"])));
        assert!(!all_selected(&selections(&["", "", ""])));
        assert!(all_selected(&selections(&["Value 1", "Option 2", "Choice A"])));
        // Vacuously true for zero fields.
        assert!(all_selected(&[]));
    }

    #[test]
    fn test_compose_prompt_template_exactness() {
        assert_eq!(
            compose_prompt(&selections(&["X", "Y", "Z"])),
            "hello X iam rohan Y and Z"
        );
    }

    #[test]
    fn test_compose_prompt_with_missing_entries() {
        assert_eq!(compose_prompt(&[]), "hello  iam rohan  and ");
        assert_eq!(
            compose_prompt(&selections(&["only"])),
            "hello only iam rohan  and "
        );
    }

    #[test]
    fn test_compose_prompt_ignores_extra_entries() {
        assert_eq!(
            compose_prompt(&selections(&["A", "B", "C", "D"])),
            "hello A iam rohan B and C"
        );
    }

    #[test]
    fn test_preview_drops_empty_and_unknown_values() {
        // Second field unselected: remaining values compact to the left.
        let preview = selected_values_preview(&selections(&["Value 2", "", "Choice C"]));
        assert_eq!(preview, "hello Value 2 iam rohan Choice C and ");

        // A value outside the field's configured set is dropped too.
        let preview = selected_values_preview(&selections(&["Value 2", "bogus", "Choice C"]));
        assert_eq!(preview, "hello Value 2 iam rohan Choice C and ");
    }

    #[test]
    fn test_preview_with_full_selection_matches_prompt() {
        let full = selections(&["Value 2", "Option 1", "Choice C"]);
        assert_eq!(selected_values_preview(&full), compose_prompt(&full));
        assert_eq!(
            compose_prompt(&full),
            "hello Value 2 iam rohan Option 1 and Choice C"
        );
    }
}
