//! # client
//!
//! Leptos + WASM frontend for Postdesk, a small editor for scheduled social
//! posts.
//!
//! This crate contains pages, components, application state, the record
//! data-service interface with its in-process implementation, and the
//! authentication provider calls. The `server` crate renders it via SSR and
//! serves the hydration bundle.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
