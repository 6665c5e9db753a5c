//! # clinic-client
//!
//! Leptos + WASM frontend for Dr. AJ's clinic: login, booking dashboard, and
//! the floating assistant chat.
//!
//! ARCHITECTURE
//! ============
//! `state` holds plain per-component state machines, `components` and `pages`
//! render them through Leptos signals, and `net` defines the service-client
//! seams (`AuthClient`, `ChatClient`, `SchedulingClient`) together with the
//! timer-backed stubs the UI ships with.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
