// lib.rs - Root module for the shop_admin library
//
// The manufacturer list page of the shop admin console, plus the pieces
// it needs to run end to end: configuration, the database fixture, the
// data source behind the list query and the Leptos UI.

/// Environment-driven configuration for the server binary and DB tools
pub mod config;

/// The fixtures module contains the manufacturers table schema and seed data
pub mod fixtures;

/// Leptos web application (model and view-model always, UI behind features)
pub mod web_app;

/// WASM entry point: hydrates the server-rendered page in the browser
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::web_app::App;

    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
