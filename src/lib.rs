//! # groupchat-client
//!
//! Leptos + WASM browser client for a minimal group chat. Replaces the
//! React `client/` with a Rust-native UI layer.
//!
//! The interesting logic is the session-and-chat state machine in [`state`]:
//! auth phase transitions, message ordering, the optimistic append, and the
//! independent per-operation error channels. Everything else (HTTP calls,
//! routing, markup) is a thin wrapper around it.

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
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
