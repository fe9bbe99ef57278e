mod components;
mod config;
mod error;
mod loader;
mod services;

use crate::config::AppConfig;

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn main() {
    // Initialize tracing
    tracing_wasm::set_as_global_default();

    // Runs once per page load; the module script only starts after the
    // document has been parsed.
    let config = AppConfig::from_env();
    wasm_bindgen_futures::spawn_local(loader::load_events(config));
}
