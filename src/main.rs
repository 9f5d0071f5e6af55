//! Billed Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod containers;
mod context;
mod error;
mod format;
mod models;
mod routes;
mod session;
mod store;
mod views;

use std::rc::Rc;

use app::App;
use commands::{ApiStore, BillStore};
use config::AppConfig;
use leptos::prelude::*;
use session::Session;

/// Panic message first, then the log history leading up to it
fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        console_error_panic_hook::hook(info);
        if let Some(logger) = console_logger::global() {
            web_sys::console::error_1(&logger.report().into());
        }
    }));
}

fn main() {
    install_panic_hook();

    let config = AppConfig::load();
    if let Err(e) = console_logger::init(config.log_level()) {
        web_sys::console::warn_1(&format!("logger already set: {}", e).into());
    }
    log::info!("[App] starting, api at {}", config.api_url);

    let session = match Session::load() {
        Ok(session) => Some(session),
        Err(e) => {
            log::warn!("[App] no session: {}", e);
            None
        }
    };
    let jwt = session.as_ref().and_then(|s| s.jwt.clone());
    let store: Rc<dyn BillStore> = Rc::new(ApiStore::new(config.api_url.clone(), jwt));

    mount_to_body(move || view! { <App store=store session=session config=config /> });
}
