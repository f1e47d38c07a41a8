//! Leaf Doctor Web App (Leptos + WASM)

mod app;
mod components;
mod api;
mod config;
mod preview;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    log::info!("Leaf Doctor starting (endpoint: {})", config::endpoint());
    leptos::mount::mount_to_body(app::App);
}
