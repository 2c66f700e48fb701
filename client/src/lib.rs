//! # client
//!
//! Leptos + WASM frontend for Daybreak, the daily-practice application.
//!
//! The crate contains pages, components, application state, network types,
//! and the session resolution flow that gates protected content on the
//! outcome of the check→refresh authentication chain.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Hydration entry point invoked by the generated WASM bindings.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
