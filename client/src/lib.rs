//! Leptos + WASM dashboard for the Voicelet voice-widget service.
//!
//! Pages cover the marketing landing screen, hosted-auth login/signup,
//! and the tabbed dashboard (website crawler, assistant creator, widget
//! generator, billing, settings). Backend calls go through `net`; list
//! data flows through the pluggable repositories in `repo` so the same
//! view logic runs against the fixed demo dataset and an HTTP source.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod repo;
pub mod state;
pub mod util;

/// WASM entry point invoked by the hydration bootstrap script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
