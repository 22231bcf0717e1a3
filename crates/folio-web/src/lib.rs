//! Folio Web UI
//!
//! Leptos (CSR) front end for the Folio public site and admin panel.

pub mod api;
pub mod app;
pub mod components;
pub mod pages;

use wasm_bindgen::prelude::*;

/// Load runtime settings, then mount the Leptos application
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Folio UI {} starting", folio_core::VERSION);

    wasm_bindgen_futures::spawn_local(async {
        api::load_config().await;
        leptos::mount_to_body(app::App);
    });
}
