//! # huevault-client
//!
//! Leptos + WASM frontend for HueVault, a design-asset web application.
//! Covers the palette generator, the color-blindness simulator, archive
//! editing with live project previews, and the background-removal and
//! SVG-conversion tools.
//!
//! All color science, image processing, and persistence happen in the
//! HueVault backend behind plain JSON/multipart HTTP endpoints; this crate
//! is the presentation layer: form validation, request wiring, and
//! reactive DOM rendering.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point for client-side hydration.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
