//! # client
//!
//! Leptos + WASM frontend for the wealth advisor chat.
//!
//! This crate contains the page, components, reactive chat state, and the
//! `/query` HTTP call. The chat rules themselves (submit guard, response
//! decoding, line rendering) live in the shared `advisor` crate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
