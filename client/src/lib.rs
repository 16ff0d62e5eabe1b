//! # client
//!
//! Leptos + WASM frontend for the SmartBot.uz marketing site. Replaces the
//! hand-rolled DOM scripting layer with a Rust-native UI: the AI tool
//! panels talk to the backend's `/ai/*` endpoints, while the page behaviors
//! (scroll effects, counters, filters, form validation) and the local
//! rule-based chat widget run entirely in the browser on top of the pure
//! `sitelogic` crate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: mounts the app over the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
