//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render portal chrome while reading/writing shared state from
//! Leptos context providers.

pub mod navbar;
pub mod theme_toggle;
