pub mod app;
pub mod app_shell;
pub mod domain;
pub mod layout;
pub mod shared;
pub mod usecases;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let (config, warning) = shared::config::load_config();

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.log_level());
    console_error_panic_hook::set_once();
    if let Some(warning) = warning {
        log::warn!("{}", warning);
    }

    leptos::mount::mount_to_body(move || view! { <App config=config.clone() /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
