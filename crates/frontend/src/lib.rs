pub mod app;
pub mod domain;
pub mod layout;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

/// Debug builds log everything, release builds only warnings and errors.
fn console_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Warn
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    _ = console_log::init_with_level(console_level());
    console_error_panic_hook::set_once();
    log::info!("admin console v{} starting", env!("CARGO_PKG_VERSION"));

    leptos::mount::mount_to_body(app::App);
}
