use std::path::PathBuf;
use std::sync::Arc;

use iced::widget::{button, column, container, image, pick_list, row, scrollable, text, Space};
use iced::window::{self, Id};
use iced::{Alignment, Background, Element, Length, Size, Subscription, Task};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::adapters::FileImageSource;
use crate::core::interfaces::adapters::{PlantIdentificationService, RemoteImageLoader};
use crate::core::models::{
    EncodedImage, FacingMode, IdentificationResult, IdentificationTicket, Language, PipelineError,
    UserSettings,
};
use crate::core::orchestrators::{CameraSession, IdentificationPipeline};
use crate::global_constants::{
    ACCEPTED_FILE_EXTENSIONS, APPLICATION_TITLE, LOG_TAG_ORCHESTRATOR, NOTIFICATION_DISPLAY_DURATION,
    SAMPLE_IMAGES,
};
use crate::presentation::app_theme;
use crate::presentation::i18n::{translate, TextKey};
use crate::presentation::{
    render_camera_panel, render_gallery, render_notifications, CameraPanelState,
    CameraViewMessage, GalleryViewMessage, Notification, UploadView, UploadViewMessage,
};

#[derive(Debug, Clone)]
pub enum OrchestratorMessage {
    OpenMainWindow,
    WindowClosed(Id),
    Upload(UploadViewMessage),
    Camera(CameraViewMessage),
    Gallery(GalleryViewMessage),
    FileDropped(PathBuf),
    FilePicked(Option<PathBuf>),
    ImageLoaded(Result<EncodedImage, PipelineError>),
    ProgressTick(IdentificationTicket),
    IdentificationComplete(
        IdentificationTicket,
        Result<IdentificationResult, PipelineError>,
    ),
    ThumbnailLoaded(usize, Result<EncodedImage, PipelineError>),
    CameraReady(Result<FacingMode, PipelineError>),
    CameraCaptured(Result<EncodedImage, PipelineError>),
    DismissNotification(Uuid),
    ToggleTheme,
    UpdateLanguage(Language),
}

/// Effects run by the orchestrator's tasks. Kept as plain async functions so the
/// same code can be driven step by step in tests.
pub mod effects {
    use super::*;

    pub async fn pick_file(
        dialog: impl std::future::Future<Output = Option<rfd::FileHandle>>,
    ) -> OrchestratorMessage {
        let picked = dialog.await;
        OrchestratorMessage::FilePicked(picked.map(|handle| handle.path().to_path_buf()))
    }

    pub async fn load_files(paths: Vec<PathBuf>) -> OrchestratorMessage {
        OrchestratorMessage::ImageLoaded(FileImageSource::load_first(&paths).await)
    }

    pub async fn load_sample(
        remote_image_loader: Arc<dyn RemoteImageLoader>,
        url: String,
    ) -> OrchestratorMessage {
        OrchestratorMessage::ImageLoaded(remote_image_loader.load_remote_image(&url).await)
    }

    pub async fn load_thumbnail(
        remote_image_loader: Arc<dyn RemoteImageLoader>,
        index: usize,
        url: String,
    ) -> OrchestratorMessage {
        OrchestratorMessage::ThumbnailLoaded(index, remote_image_loader.load_remote_image(&url).await)
    }

    pub async fn identify(
        identification_service: Arc<dyn PlantIdentificationService>,
        ticket: IdentificationTicket,
        image: EncodedImage,
    ) -> OrchestratorMessage {
        let outcome = identification_service.identify(&image).await;
        OrchestratorMessage::IdentificationComplete(ticket, outcome)
    }

    pub async fn open_camera(camera_session: Arc<Mutex<CameraSession>>) -> OrchestratorMessage {
        let mut session = camera_session.lock().await;
        OrchestratorMessage::CameraReady(session.open().await)
    }

    pub async fn toggle_camera(camera_session: Arc<Mutex<CameraSession>>) -> OrchestratorMessage {
        let mut session = camera_session.lock().await;
        OrchestratorMessage::CameraReady(session.toggle_facing_mode().await)
    }

    pub async fn capture_photo(camera_session: Arc<Mutex<CameraSession>>) -> OrchestratorMessage {
        let mut session = camera_session.lock().await;
        OrchestratorMessage::CameraCaptured(session.capture().await)
    }

    pub async fn close_camera(camera_session: Arc<Mutex<CameraSession>>) {
        camera_session.lock().await.shutdown().await;
    }
}

pub struct AppOrchestrator {
    identification_service: Arc<dyn PlantIdentificationService>,
    remote_image_loader: Arc<dyn RemoteImageLoader>,
    camera_session: Arc<Mutex<CameraSession>>,
    pipeline: IdentificationPipeline,
    preview_handle: Option<image::Handle>,
    is_loading_image: bool,
    is_file_dialog_open: bool,
    camera_panel: Option<CameraPanelState>,
    is_gallery_open: bool,
    gallery_thumbnails: Vec<Option<image::Handle>>,
    notifications: Vec<Notification>,
    settings: UserSettings,
    settings_path: Option<PathBuf>,
    main_window_id: Option<Id>,
}

impl AppOrchestrator {
    pub fn build(
        identification_service: Arc<dyn PlantIdentificationService>,
        remote_image_loader: Arc<dyn RemoteImageLoader>,
        camera_session: CameraSession,
        settings: UserSettings,
        settings_path: Option<PathBuf>,
    ) -> Self {
        Self {
            identification_service,
            remote_image_loader,
            camera_session: Arc::new(Mutex::new(camera_session)),
            pipeline: IdentificationPipeline::new(),
            preview_handle: None,
            is_loading_image: false,
            is_file_dialog_open: false,
            camera_panel: None,
            is_gallery_open: false,
            gallery_thumbnails: vec![None; SAMPLE_IMAGES.len()],
            notifications: Vec::new(),
            settings,
            settings_path,
            main_window_id: None,
        }
    }

    pub fn pipeline(&self) -> &IdentificationPipeline {
        &self.pipeline
    }

    pub fn camera_session(&self) -> Arc<Mutex<CameraSession>> {
        Arc::clone(&self.camera_session)
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn camera_panel(&self) -> Option<&CameraPanelState> {
        self.camera_panel.as_ref()
    }

    pub fn settings(&self) -> &UserSettings {
        &self.settings
    }

    pub fn get_window_title(&self, _window: Id) -> String {
        APPLICATION_TITLE.to_string()
    }

    /// Drop, pick, camera and gallery are all closed while a request is in flight,
    /// another image is still being read, or the file dialog is up.
    pub fn is_intake_enabled(&self) -> bool {
        self.pipeline.is_intake_enabled() && !self.is_loading_image && !self.is_file_dialog_open
    }

    pub fn update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        if !matches!(message, OrchestratorMessage::ProgressTick(_)) {
            log::info!("{} Received message: {:?}", LOG_TAG_ORCHESTRATOR, message);
        }

        match message {
            OrchestratorMessage::OpenMainWindow => self.handle_open_main_window(),
            OrchestratorMessage::WindowClosed(id) => self.handle_window_closed(id),
            OrchestratorMessage::Upload(upload_message) => self.handle_upload_message(upload_message),
            OrchestratorMessage::Camera(camera_message) => self.handle_camera_message(camera_message),
            OrchestratorMessage::Gallery(gallery_message) => {
                self.handle_gallery_message(gallery_message)
            }
            OrchestratorMessage::FileDropped(path) => self.handle_files_received(vec![path]),
            OrchestratorMessage::FilePicked(picked) => self.handle_file_picked(picked),
            OrchestratorMessage::ImageLoaded(loaded) => self.handle_image_loaded(loaded),
            OrchestratorMessage::ProgressTick(ticket) => {
                self.pipeline.advance_progress(ticket);
                Task::none()
            }
            OrchestratorMessage::IdentificationComplete(ticket, outcome) => {
                self.handle_identification_complete(ticket, outcome)
            }
            OrchestratorMessage::ThumbnailLoaded(index, loaded) => {
                self.handle_thumbnail_loaded(index, loaded);
                Task::none()
            }
            OrchestratorMessage::CameraReady(ready) => self.handle_camera_ready(ready),
            OrchestratorMessage::CameraCaptured(captured) => self.handle_camera_captured(captured),
            OrchestratorMessage::DismissNotification(id) => {
                self.notifications.retain(|notification| notification.id != id);
                Task::none()
            }
            OrchestratorMessage::ToggleTheme => {
                self.settings.theme_mode = self.settings.theme_mode.toggled();
                self.persist_settings();
                Task::none()
            }
            OrchestratorMessage::UpdateLanguage(language) => {
                self.settings.language = language;
                self.persist_settings();
                Task::none()
            }
        }
    }

    pub fn subscription(&self) -> Subscription<OrchestratorMessage> {
        let window_events = iced::event::listen_with(|event, _status, id| match event {
            iced::Event::Window(window::Event::Closed) => {
                Some(OrchestratorMessage::WindowClosed(id))
            }
            iced::Event::Window(window::Event::FileDropped(path)) => {
                Some(OrchestratorMessage::FileDropped(path))
            }
            _ => None,
        });

        match self.pipeline.ticking_ticket() {
            Some(ticket) => Subscription::batch([
                window_events,
                iced::time::every(self.pipeline.progress_ticker().interval())
                    .with(ticket)
                    .map(|(ticket, _instant)| OrchestratorMessage::ProgressTick(ticket)),
            ]),
            None => window_events,
        }
    }

    fn handle_open_main_window(&mut self) -> Task<OrchestratorMessage> {
        if self.main_window_id.is_some() {
            log::warn!("{} Main window already open", LOG_TAG_ORCHESTRATOR);
            return Task::none();
        }

        let (id, task) = window::open(window::Settings {
            size: Size::new(760.0, 820.0),
            position: window::Position::Centered,
            ..Default::default()
        });

        self.main_window_id = Some(id);
        log::info!("{} Main window created with ID: {:?}", LOG_TAG_ORCHESTRATOR, id);
        task.discard()
    }

    fn handle_window_closed(&mut self, id: Id) -> Task<OrchestratorMessage> {
        if Some(id) != self.main_window_id {
            return Task::none();
        }

        log::info!("{} Main window closed, shutting down", LOG_TAG_ORCHESTRATOR);
        self.main_window_id = None;
        self.camera_panel = None;

        let camera_session = Arc::clone(&self.camera_session);
        Task::future(effects::close_camera(camera_session))
            .discard()
            .chain(iced::exit())
    }

    fn handle_upload_message(&mut self, message: UploadViewMessage) -> Task<OrchestratorMessage> {
        match message {
            UploadViewMessage::PickFile => self.handle_pick_file(),
            UploadViewMessage::OpenCamera => self.handle_open_camera(),
            UploadViewMessage::OpenGallery => self.handle_open_gallery(),
            UploadViewMessage::ClearPreview => {
                self.pipeline.clear_preview();
                self.preview_handle = None;
                Task::none()
            }
        }
    }

    fn handle_pick_file(&mut self) -> Task<OrchestratorMessage> {
        if !self.is_intake_enabled() {
            return Task::none();
        }

        // The dialog is created here, on the UI thread, and only awaited in the task.
        let dialog = rfd::AsyncFileDialog::new()
            .add_filter("Images", &ACCEPTED_FILE_EXTENSIONS)
            .pick_file();

        self.is_file_dialog_open = true;
        Task::future(effects::pick_file(dialog))
    }

    fn handle_file_picked(&mut self, picked: Option<PathBuf>) -> Task<OrchestratorMessage> {
        self.is_file_dialog_open = false;

        match picked {
            Some(path) => self.handle_files_received(vec![path]),
            None => {
                log::debug!("{} File dialog dismissed", LOG_TAG_ORCHESTRATOR);
                Task::none()
            }
        }
    }

    fn handle_files_received(&mut self, paths: Vec<PathBuf>) -> Task<OrchestratorMessage> {
        if !self.is_intake_enabled() {
            log::info!(
                "{} Ignoring {} file(s), intake is disabled",
                LOG_TAG_ORCHESTRATOR,
                paths.len()
            );
            return Task::none();
        }

        self.is_loading_image = true;
        self.is_gallery_open = false;
        let load = Task::future(effects::load_files(paths));

        if self.camera_panel.take().is_some() {
            log::info!("{} File received, closing camera panel", LOG_TAG_ORCHESTRATOR);
            let close = Task::future(effects::close_camera(Arc::clone(&self.camera_session)));
            return Task::batch([close.discard(), load]);
        }

        load
    }

    fn handle_image_loaded(
        &mut self,
        loaded: Result<EncodedImage, PipelineError>,
    ) -> Task<OrchestratorMessage> {
        self.is_loading_image = false;

        let image = match loaded {
            Ok(image) => image,
            Err(e) => return self.notify_error(&e),
        };

        let preview_handle = match image.decode_bytes() {
            Ok(raw_bytes) => image::Handle::from_bytes(raw_bytes),
            Err(e) => return self.notify_error(&e),
        };

        if !self.pipeline.accept_image(image) {
            log::warn!(
                "{} Image refused while identification is running",
                LOG_TAG_ORCHESTRATOR
            );
            return Task::none();
        }
        self.preview_handle = Some(preview_handle);

        let Some((ticket, image)) = self.pipeline.begin_identification() else {
            return Task::none();
        };

        let identification_service = Arc::clone(&self.identification_service);
        Task::future(effects::identify(identification_service, ticket, image))
    }

    fn handle_identification_complete(
        &mut self,
        ticket: IdentificationTicket,
        outcome: Result<IdentificationResult, PipelineError>,
    ) -> Task<OrchestratorMessage> {
        let failure = outcome.as_ref().err().cloned();

        if !self.pipeline.complete_identification(ticket, outcome) {
            return Task::none();
        }

        match failure {
            Some(error) => {
                self.preview_handle = None;
                self.notify_error(&error)
            }
            None => Task::none(),
        }
    }

    fn handle_open_camera(&mut self) -> Task<OrchestratorMessage> {
        if !self.is_intake_enabled() {
            return Task::none();
        }

        self.is_gallery_open = false;
        self.camera_panel = Some(CameraPanelState::Opening);
        Task::future(effects::open_camera(Arc::clone(&self.camera_session)))
    }

    fn handle_camera_message(&mut self, message: CameraViewMessage) -> Task<OrchestratorMessage> {
        let camera_session = Arc::clone(&self.camera_session);
        let can_use_camera = self.is_intake_enabled()
            && matches!(self.camera_panel, Some(CameraPanelState::Ready(_)));

        match message {
            CameraViewMessage::ToggleFacingMode => {
                if !can_use_camera {
                    return Task::none();
                }
                self.camera_panel = Some(CameraPanelState::Opening);
                Task::future(effects::toggle_camera(camera_session))
            }
            CameraViewMessage::Capture => {
                if !can_use_camera {
                    log::info!("{} Ignoring capture, camera is not usable", LOG_TAG_ORCHESTRATOR);
                    return Task::none();
                }
                self.camera_panel = Some(CameraPanelState::Capturing);
                Task::future(effects::capture_photo(camera_session))
            }
            CameraViewMessage::Close => {
                self.camera_panel = None;
                Task::future(effects::close_camera(camera_session)).discard()
            }
        }
    }

    fn handle_camera_ready(
        &mut self,
        ready: Result<FacingMode, PipelineError>,
    ) -> Task<OrchestratorMessage> {
        if self.camera_panel.is_none() {
            log::info!("{} Camera panel was closed while starting, releasing", LOG_TAG_ORCHESTRATOR);
            return Task::future(effects::close_camera(Arc::clone(&self.camera_session))).discard();
        }

        match ready {
            Ok(facing_mode) => {
                self.camera_panel = Some(CameraPanelState::Ready(facing_mode));
                if self.settings.preferred_facing_mode != facing_mode {
                    self.settings.preferred_facing_mode = facing_mode;
                    self.persist_settings();
                }
                Task::none()
            }
            Err(e) => {
                self.camera_panel = Some(CameraPanelState::Failed(e.to_string()));
                self.notify_error(&e)
            }
        }
    }

    fn handle_camera_captured(
        &mut self,
        captured: Result<EncodedImage, PipelineError>,
    ) -> Task<OrchestratorMessage> {
        if self.camera_panel.is_none() {
            log::info!("{} Camera panel was closed while capturing, dropping frame", LOG_TAG_ORCHESTRATOR);
            return Task::none();
        }

        match captured {
            Ok(image) => {
                self.camera_panel = None;
                self.handle_image_loaded(Ok(image))
            }
            Err(e) => {
                self.camera_panel = Some(CameraPanelState::Failed(e.to_string()));
                self.notify_error(&e)
            }
        }
    }

    fn handle_open_gallery(&mut self) -> Task<OrchestratorMessage> {
        if !self.is_intake_enabled() {
            return Task::none();
        }
        self.is_gallery_open = true;

        let missing_thumbnails = SAMPLE_IMAGES
            .iter()
            .enumerate()
            .filter(|(index, _)| self.gallery_thumbnails[*index].is_none())
            .map(|(index, sample)| {
                Task::future(effects::load_thumbnail(
                    Arc::clone(&self.remote_image_loader),
                    index,
                    sample.url.to_string(),
                ))
            })
            .collect::<Vec<_>>();

        Task::batch(missing_thumbnails)
    }

    fn handle_thumbnail_loaded(&mut self, index: usize, loaded: Result<EncodedImage, PipelineError>) {
        let Some(slot) = self.gallery_thumbnails.get_mut(index) else {
            log::warn!("{} No sample image at index {}", LOG_TAG_ORCHESTRATOR, index);
            return;
        };

        match loaded.and_then(|image| image.decode_bytes()) {
            Ok(raw_bytes) => *slot = Some(image::Handle::from_bytes(raw_bytes)),
            Err(e) => log::warn!(
                "{} Thumbnail {} unavailable, showing placeholder: {}",
                LOG_TAG_ORCHESTRATOR,
                index,
                e
            ),
        }
    }

    fn handle_gallery_message(&mut self, message: GalleryViewMessage) -> Task<OrchestratorMessage> {
        match message {
            GalleryViewMessage::Close => {
                self.is_gallery_open = false;
                Task::none()
            }
            GalleryViewMessage::Select(index) => {
                let Some(sample) = SAMPLE_IMAGES.get(index) else {
                    log::warn!("{} No sample image at index {}", LOG_TAG_ORCHESTRATOR, index);
                    return Task::none();
                };
                if !self.is_intake_enabled() {
                    return Task::none();
                }

                log::info!("{} Selected sample image '{}'", LOG_TAG_ORCHESTRATOR, sample.alt);
                self.is_gallery_open = false;
                self.is_loading_image = true;
                Task::future(effects::load_sample(
                    Arc::clone(&self.remote_image_loader),
                    sample.url.to_string(),
                ))
            }
        }
    }

    fn notify_error(&mut self, error: &PipelineError) -> Task<OrchestratorMessage> {
        log::warn!("{} Showing error notification: {}", LOG_TAG_ORCHESTRATOR, error);

        let notification = Notification::from_error(error);
        let notification_id = notification.id;
        self.notifications.push(notification);

        Task::future(async move {
            tokio::time::sleep(NOTIFICATION_DISPLAY_DURATION).await;
            OrchestratorMessage::DismissNotification(notification_id)
        })
    }

    fn persist_settings(&self) {
        let Some(settings_path) = &self.settings_path else {
            return;
        };

        if let Err(e) = self.settings.save_to(settings_path) {
            log::error!("{} Failed to save settings: {:#}", LOG_TAG_ORCHESTRATOR, e);
        }
    }

    pub fn render_view(&self, window_id: Id) -> Element<'_, OrchestratorMessage> {
        if Some(window_id) == self.main_window_id {
            self.render_main_window()
        } else {
            text("Loading...").into()
        }
    }

    fn render_main_window(&self) -> Element<'_, OrchestratorMessage> {
        let theme = app_theme::get_theme(&self.settings.theme_mode);
        let language = self.settings.language;

        let body: Element<'_, OrchestratorMessage> = if let Some(camera_panel) = &self.camera_panel
        {
            render_camera_panel(camera_panel, self.is_intake_enabled(), language)
                .map(OrchestratorMessage::Camera)
        } else if self.is_gallery_open {
            render_gallery(
                &SAMPLE_IMAGES,
                &self.gallery_thumbnails,
                self.is_intake_enabled(),
                language,
            )
                .map(OrchestratorMessage::Gallery)
        } else {
            UploadView {
                state: self.pipeline.state(),
                preview: self.preview_handle.as_ref(),
                is_intake_enabled: self.is_intake_enabled(),
                language,
            }
            .render()
            .map(OrchestratorMessage::Upload)
        };

        let content = column![
            self.render_navbar(),
            render_notifications(&self.notifications, language)
                .map(OrchestratorMessage::DismissNotification),
            body,
        ]
        .spacing(20)
        .padding(32)
        .max_width(720)
        .align_x(Alignment::Center);

        container(scrollable(content))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .style(move |_theme| {
                let palette = theme.palette();
                iced::widget::container::Style {
                    background: Some(Background::Color(palette.background)),
                    text_color: Some(palette.text),
                    ..Default::default()
                }
            })
            .into()
    }

    fn render_navbar(&self) -> Element<'_, OrchestratorMessage> {
        let language = self.settings.language;

        let title = column![
            row![text("🌿").size(28), text(APPLICATION_TITLE).size(28)]
                .spacing(10)
                .align_y(Alignment::Center),
            text(translate(language, TextKey::AppSubtitle)).size(14),
        ]
        .spacing(4);

        let theme_label = match self.settings.theme_mode {
            crate::core::models::ThemeMode::Dark => translate(language, TextKey::LightMode),
            crate::core::models::ThemeMode::Light => translate(language, TextKey::DarkMode),
        };

        let theme_btn = button(text(theme_label).size(13))
            .padding([8, 14])
            .style(|theme, status| app_theme::secondary_button_style(theme, status))
            .on_press(OrchestratorMessage::ToggleTheme);

        let language_picker = pick_list(
            Language::ALL,
            Some(language),
            OrchestratorMessage::UpdateLanguage,
        )
        .padding(8);

        row![
            title,
            Space::new().width(Length::Fill),
            theme_btn,
            language_picker
        ]
        .spacing(12)
        .align_y(Alignment::Center)
        .into()
    }
}
