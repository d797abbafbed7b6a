pub mod app;
pub mod routes;
pub mod shared;
pub mod system;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(shared::config::config().logging.log_level());
    console_error_panic_hook::set_once();

    // Only reportable once the logger is installed
    if let Some(e) = shared::config::config_error() {
        log::warn!("Invalid frontend config, using defaults: {}", e);
    }

    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
