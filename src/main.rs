mod app;
mod core;
mod features;
mod pages;

use leptos::prelude::*;
use tracing::{info, warn, Level};

use crate::app::App;
use crate::core::config::BoardConfig;
use crate::core::logging::init_logging;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = BoardConfig::load_from_document();
    init_logging(config.level().unwrap_or(Level::INFO));
    if let Some(e) = config_error {
        warn!("falling back to default board config: {}", e);
    }
    info!(new_order_column = %config.new_order_column, "order board starting");

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
