//! UI components and layouts.
//!
//! Leptos SSR components for rendering the application shell, following
//! ShadCN-UI design principles.
//!
//! # Structure
//!
//! - [`app`]: Main application component
//! - [`components`]: Reusable ShadCN-style UI components
//! - [`composer`]: Prompt composer layout components

pub mod app;
pub mod components;
pub mod composer;
