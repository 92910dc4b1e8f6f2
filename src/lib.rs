//! # skillmint-client
//!
//! Leptos + WASM frontend for the SkillMint learning platform. Replaces the
//! React + Vite `client/` with a Rust-native UI layer.
//!
//! This crate contains pages, components, application state, and the HTTP
//! helpers that relay authentication, resume, and code-editor requests to
//! the SkillMint backend. Heavy lifting (resume analysis, code formatting,
//! PDF rendering) stays server-side; the client is a presentation and
//! state-relay layer.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Hydrate entry point invoked by the generated JS shim in the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
