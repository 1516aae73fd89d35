#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod adapters;
mod app;
mod core;
mod global_constants;
mod ports;
mod presentation;

#[cfg(test)]
mod test_support;

use iced::daemon;

use crate::global_constants::LOG_TAG_APP;

fn main() -> iced::Result {
    env_logger::init();

    log::info!("{} Starting Plant Identifier", LOG_TAG_APP);

    daemon(
        app::PlantApp::build,
        app::PlantApp::handle_update,
        app::PlantApp::render_view,
    )
    .title(app::PlantApp::window_title)
    .theme(app::PlantApp::window_theme)
    .subscription(app::PlantApp::handle_subscription)
    .run()
}
