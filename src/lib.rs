//! # argent-client
//!
//! Leptos + WASM frontend for the Argent Bank demo: a sign-in form, a
//! browser-persisted session token, and a profile page that fetches and
//! edits the user's display name over a small REST API.
//!
//! This crate contains pages, shared components, application state, the
//! REST client layer, and the browser credential store. All browser-only
//! code is gated behind the `hydrate` feature so the crate also compiles
//! for SSR and for native unit tests.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
