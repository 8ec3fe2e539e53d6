//! # gonawin
//!
//! Leptos + WASM browser client for the gonawin tournament prediction game.
//!
//! This crate holds the route table, the navigation guard that enforces
//! sign-in requirements on every route change, the session context, OAuth
//! sign-in completion, the REST client for the `/j` backend API, and the
//! route-level pages that render its payloads.

pub mod app;
pub mod auth;
pub mod components;
pub mod config;
pub mod error;
pub mod guard;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the application.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(config::AppConfig::from_env().log_level);
    log::info!("gonawin client starting");
    leptos::mount::mount_to_body(app::App);
}
