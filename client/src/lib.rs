//! # client
//!
//! Leptos + WASM frontend for the FoodTrace supply-chain tracker.
//!
//! This crate contains pages, components, application state, the REST API
//! client, and the request-assembly logic for the login and product
//! transformation flows. The root `foodtrace` package renders it on the server
//! and serves the compiled WASM bundle for hydration.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
pub(crate) mod test_support;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
