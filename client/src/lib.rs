//! Saldo web client: session-gated systems catalog rendered with Leptos.
//!
//! ARCHITECTURE
//! ============
//! `app` wires routes and shared context, `pages` own route orchestration,
//! `components` render reusable pieces, `net` talks to the catalog API,
//! `state` holds plain view state and `util` isolates browser glue.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install console logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("hydrating saldo client");
    leptos::mount::hydrate_body(app::App);
}
