// lib.rs - Root module for the invoice_crm library
//
// The same crate is compiled twice by cargo-leptos: natively with `ssr`
// for the server binary and to WASM with `hydrate` for the browser.

/// Environment-driven server settings
#[cfg(feature = "db-tools")]
pub mod config;

/// Table definitions and sample data
#[cfg(feature = "db-tools")]
pub mod fixtures;

pub mod web_app;

/// WASM entry point, called by the generated JS once the page is loaded
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(web_app::App);
}
