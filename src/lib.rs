//! # healconnect-client
//!
//! Leptos + WASM front end for the HealConnect patient portal. Replaces the
//! original React navbar/shell with a Rust-native UI layer.
//!
//! This crate contains pages, components, application state, and the small
//! REST layer used to resolve the current session. Browser-only behavior is
//! gated behind the `hydrate` feature so SSR stays deterministic.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Client entry point: installs the panic hook + logger and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
