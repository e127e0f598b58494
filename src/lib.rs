#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod lifecycle;
pub mod models;
pub mod pages;

#[cfg(feature = "ssr")]
pub mod config;

// Re-export for convenience
pub use app::App;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("hydrating landing page");
    leptos::mount::hydrate_body(App);
}
