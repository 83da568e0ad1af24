//! # client
//!
//! Leptos + WASM front end for the DMM registry administration console.
//!
//! This crate contains the session store, route guard and post-login
//! dispatcher, the auth-service REST client, and the pages and components
//! built on them. The `dmm-admin` server renders it with SSR; the `hydrate`
//! build takes over in the browser, where the session lives.

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
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
