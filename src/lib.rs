//! # shopeasy
//!
//! Leptos + WASM frontend for the ShopEasy storefront: category and product
//! browsing backed by a mock catalog, a login form, and a client-side
//! authentication store that persists its session to `localStorage` and
//! stamps a bearer token on every API call through the gateway in `net`.

pub mod app;
pub mod components;
pub mod data;
pub mod net;
pub mod pages;
pub mod services;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
