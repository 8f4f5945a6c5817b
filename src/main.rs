//! CTF Client Entry Point

mod api;
mod app;
mod browser;
mod components;
mod config;
mod context;
mod error;
mod load;
mod models;
mod session;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("CTF client starting (API: {})", config::API_URL);
    mount_to_body(App);
}
