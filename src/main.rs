//! Todo Client Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod coordinator;
mod error;
mod models;
mod store;
mod view;

use app::App;
use config::ClientConfig;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();

    let config = ClientConfig::from_build_env();
    let level = config
        .as_ref()
        .map(|config| config.log_level)
        .unwrap_or(LevelFilter::Info);
    if let Err(err) = console_logger::init(level) {
        web_sys::console::warn_1(&format!("Console logger not installed: {}", err).into());
    }

    match config {
        Ok(config) => mount_to_body(move || view! { <App config=config /> }),
        Err(err) => log::error!("Invalid configuration: {}", err),
    }
}
