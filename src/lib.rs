//! # talkboard
//!
//! Leptos + WASM client for the talkboard chat application: email/password
//! auth, a user directory, per-pair chats, and an in-room message list.
//!
//! The state store (`state::store`) mediates every backend interaction; the
//! route guard (`util::guard`) enforces per-route auth requirements; the
//! session cache (`util::session_cache`) keeps the signed-in flag and
//! username across reloads.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: wires logging and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
