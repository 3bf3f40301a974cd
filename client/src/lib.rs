//! # client
//!
//! Leptos + WASM frontend for LegalAid Connect.
//!
//! This crate contains the app shell, pages, components, reactive state
//! wrappers, and browser glue. Domain rules (session lifecycle, listing,
//! validation, formatting) live in the `community` crate; this crate only
//! binds them to signals and markup.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: wire browser logging, then hydrate the server-rendered
/// shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
