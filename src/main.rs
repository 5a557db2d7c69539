//! Pedidos Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod store;
mod view;

use app::App;
use config::ApiConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = ApiConfig::from_build_env();
    let logs = match rolling_logger::init_logger("Pedidos", config.log_level) {
        Ok(buffer) => Some(buffer),
        Err(e) => {
            web_sys::console::error_1(&e.to_string().into());
            None
        }
    };

    mount_to_body(move || view! { <App config=config.clone() logs=logs.clone() /> });
}
