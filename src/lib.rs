//! # authgate
//!
//! Leptos + WASM single-page client with sign-up, sign-in and a gated
//! welcome screen, backed by a remote authentication endpoint.
//!
//! The session is a locally stored token: present means authenticated.
//! Route gating, form validation and error normalization are pure functions
//! so they can be exercised natively without a browser.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs logging and the panic hook, then mounts the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger init failed: {e}").into());
    }
    log::info!("authgate starting");
    leptos::mount::mount_to_body(app::App);
}
