use std::sync::Arc;

use iced::window::Id;
use iced::{Element, Subscription, Task, Theme};

use crate::adapters::{build_http_client, GalleryImageSource, PlantIdApiClient};
use crate::core::models::UserSettings;
use crate::core::orchestrators::app_orchestrator::{AppOrchestrator, OrchestratorMessage};
use crate::core::orchestrators::CameraSession;
use crate::global_constants::LOG_TAG_APP;
use crate::ports::NokhwaCameraDevice;
use crate::presentation::app_theme;

pub struct PlantApp {
    orchestrator: AppOrchestrator,
}

impl PlantApp {
    pub fn build() -> (Self, Task<OrchestratorMessage>) {
        log::info!("{} Initializing application", LOG_TAG_APP);

        let settings_path = UserSettings::get_settings_file_path()
            .map_err(|e| log::warn!("{} Settings will not be persisted: {}", LOG_TAG_APP, e))
            .ok();

        let settings = settings_path
            .as_deref()
            .map(UserSettings::load_from)
            .transpose()
            .unwrap_or_else(|e| {
                log::warn!("{} Failed to load settings: {:#}, using defaults", LOG_TAG_APP, e);
                None
            })
            .unwrap_or_default();

        let http_client = build_http_client();
        let camera_session = CameraSession::new(
            Arc::new(NokhwaCameraDevice::initialize()),
            settings.preferred_facing_mode,
        );

        let orchestrator = AppOrchestrator::build(
            Arc::new(PlantIdApiClient::new(http_client.clone())),
            Arc::new(GalleryImageSource::new(http_client)),
            camera_session,
            settings,
            settings_path,
        );

        (
            Self { orchestrator },
            Task::done(OrchestratorMessage::OpenMainWindow),
        )
    }

    pub fn handle_update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        self.orchestrator.update(message)
    }

    pub fn render_view(&self, window_id: Id) -> Element<'_, OrchestratorMessage> {
        self.orchestrator.render_view(window_id)
    }

    pub fn window_title(&self, window_id: Id) -> String {
        self.orchestrator.get_window_title(window_id)
    }

    pub fn window_theme(&self, _window_id: Id) -> Theme {
        app_theme::get_theme(&self.orchestrator.settings().theme_mode)
    }

    pub fn handle_subscription(&self) -> Subscription<OrchestratorMessage> {
        self.orchestrator.subscription()
    }
}
