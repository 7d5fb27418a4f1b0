//! Shopping List Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod controller;
mod error;
mod filter;
mod list;
mod logging;
mod models;
mod reconcile;
mod storage;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = AppConfig::default();
    logging::init(config.log_level);
    mount_to_body(move || view! { <App config=config.clone() /> });
}
