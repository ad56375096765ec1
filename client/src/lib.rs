//! # client
//!
//! Leptos + WASM frontend for the pinboard.
//!
//! This crate contains the root component, the header/mainboard/pin
//! components, small client-side state models, and the glue that runs
//! `pins` searches on the browser event loop. Build with the `csr` feature
//! for the browser bundle.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod state;

/// Browser entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
