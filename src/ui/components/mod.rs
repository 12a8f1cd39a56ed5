//! ShadCN-style reusable UI components.
//!
//! A small set of composable components rendered via Leptos, inspired by
//! shadcn/ui. Only the primitives the composer interface actually uses
//! live here.
//!
//! # Components
//!
//! - [`Button`]: Clickable button with variants and reactive disabled state
//! - [`Select`]: Controlled native select with a placeholder entry
//! - [`Tooltip`]: Hover tooltip with reactive text
//! - [`icons`]: SVG icon components

mod button;
mod icons;
mod select;
mod tooltip;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use icons::*;
pub use select::Select;
pub use tooltip::Tooltip;
