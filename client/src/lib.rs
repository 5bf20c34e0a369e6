//! # client
//!
//! Leptos + WASM frontend for the waitlist landing page.
//!
//! This crate contains the page and its components, the capture-form state
//! models, the build-time store configuration, and the insert client for the
//! hosted waitlist store. The `hydrate` feature builds the browser bundle; the
//! `ssr` feature is consumed by the Axum host for server rendering.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: install panic and log hooks, then hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
