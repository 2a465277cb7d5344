#![allow(warnings)]
//! QRail Frontend Entry Point

mod models;
mod mock_data;
mod filters;
mod schedule;
mod scanner;
mod export;
mod qr;
mod config;
mod error;
mod logging;
mod context;
mod store;
mod components;
mod pages;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    let (config, error) = config::load_or_default();
    logging::init(config.log_level());
    if let Some(e) = error {
        log::warn!("[CONFIG] ignoring stored override: {}", e);
    }
    mount_to_body(move || view! { <App config=config /> });
}
