//! # client
//!
//! Leptos + WASM frontend for the Reeldeck movie/TV tracking application.
//!
//! This crate contains pages, components, application state, network types,
//! and the REST API client. It renders on the server via the `ssr` feature
//! and hydrates in the browser via the `hydrate` feature; all browser-only
//! behavior is feature-gated so server rendering stays deterministic.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
