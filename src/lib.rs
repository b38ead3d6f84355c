use leptos::*;
use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::AppConfig;
use crate::domain::logging::{LogComponent, get_logger};

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

/// Install the panic hook and the browser clock.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();
    domain::logging::init_time_provider(Box::new(infrastructure::services::BrowserTimeProvider::new()));
}

/// Mount the app into `<body>`.
///
/// `config_json` is an optional JSON object overriding [`AppConfig`]
/// fields, e.g. `{"server_url": "http://localhost:8080/query?id=1"}`.
/// A malformed override is thrown back to the caller and nothing is mounted.
#[wasm_bindgen]
pub fn mount_app(config_json: Option<String>) -> Result<(), JsValue> {
    let config = AppConfig::from_override(config_json.as_deref())?;

    let console_logger = Box::new(infrastructure::services::ConsoleLogger::new(config.log_level));
    domain::logging::init_logger(console_logger);

    get_logger().info(
        LogComponent::Presentation("Initialize"),
        &format!("Mounting quote graph, polling {}", config.server_url),
    );

    mount_to_body(move || view! { <App config=config/> });
    Ok(())
}
