/// Domain Switcher - Chrome Extension for moving the current page between domains
/// Built with Rust + WASM + Yew

mod background;
mod browser;
mod config;
mod domain;
mod domain_data;
mod error;
mod operations;
mod storage;
pub mod ui;

use wasm_bindgen::prelude::*;

pub use background::handle_command;

// Set up panic hook and logging once per page / service worker
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(config::log_level()));
}

// Re-export the URL core for JavaScript access
#[wasm_bindgen]
pub fn normalize_domain_url(raw: &str) -> Result<String, JsError> {
    domain::normalize_domain_url(raw).map_err(|e| JsError::new(&e.to_string()))
}

#[wasm_bindgen]
pub fn rewrite_url(current_url: &str, target: &str) -> Result<String, JsError> {
    domain::rewrite_url(current_url, target).map_err(|e| JsError::new(&e.to_string()))
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::App>::new().render();
}
