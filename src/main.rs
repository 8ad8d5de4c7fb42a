mod app;
mod components;
mod config;
mod core;
mod models;
mod utils;

use app::App;
use config::BrowserConfig;
use leptos::prelude::*;
use log::LevelFilter;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();

    // Only fails if a logger is already set, which cannot happen this early.
    let _ = utils::logger::init(LevelFilter::Info);

    let config = BrowserConfig::bundled().unwrap_or_else(|e| {
        log::error!("Bundled config rejected ({}), falling back to defaults", e);
        BrowserConfig::default()
    });
    if let Ok(level) = config.level_filter() {
        log::set_max_level(level);
    }

    let root = document()
        .get_element_by_id("app")
        .expect("Failed to find #app element")
        .unchecked_into::<web_sys::HtmlElement>();

    mount_to(root, move || view! { <App config=config /> }).forget();
}
