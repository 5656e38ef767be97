pub mod app;
pub mod domain;
pub mod layout;
pub mod shared;

use leptos::prelude::*;
use shared::config::{load_config, Config};
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let config = load_config();
    let level = config
        .as_ref()
        .ok()
        .and_then(|c| c.logging.log_level().ok())
        .unwrap_or(log::Level::Debug);

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(level);
    console_error_panic_hook::set_once();

    let config = config.unwrap_or_else(|e| {
        log::warn!("invalid configuration, using defaults: {}", e);
        Config::default()
    });
    log::info!(
        "starting catalog: page size {}, language {}",
        config.catalog.page_size,
        config.catalog.default_language
    );

    leptos::mount::mount_to_body(move || view! { <app::App config=config /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
