use iced::widget::{button, column, container, image, progress_bar, row, text, Space};
use iced::{Alignment, Element, Length, Theme};

use crate::core::models::{Language, PipelineState};
use crate::global_constants::PROGRESS_COMPLETE_PERCENT;
use crate::presentation::app_theme;
use crate::presentation::i18n::{translate, TextKey};
use crate::presentation::identification_result_view::render_identification_result;

const PREVIEW_HEIGHT: f32 = 280.0;

#[derive(Debug, Clone, PartialEq)]
pub enum UploadViewMessage {
    PickFile,
    OpenCamera,
    OpenGallery,
    ClearPreview,
}

pub struct UploadView<'a> {
    pub state: &'a PipelineState,
    pub preview: Option<&'a image::Handle>,
    pub is_intake_enabled: bool,
    pub language: Language,
}

impl<'a> UploadView<'a> {
    pub fn render(self) -> Element<'a, UploadViewMessage> {
        match self.preview {
            Some(preview) => self.render_preview(preview),
            None => self.render_dropzone(),
        }
    }

    fn render_dropzone(&self) -> Element<'a, UploadViewMessage> {
        let language = self.language;

        let dropzone = container(
            column![
                text("📤").size(36),
                text(translate(language, TextKey::DropzoneTitle)).size(18),
                text(translate(language, TextKey::DropzoneSubtitle))
                    .size(13)
                    .style(|theme: &Theme| iced::widget::text::Style {
                        color: Some(app_theme::muted_text_color(theme)),
                    }),
            ]
            .spacing(6)
            .align_x(Alignment::Center),
        )
        .padding(32)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .style(app_theme::dropzone_container_style);

        let intake = |message: UploadViewMessage| self.is_intake_enabled.then_some(message);

        let choose_file_btn = button(text(translate(language, TextKey::ChooseFile)).size(15))
            .padding([12, 24])
            .style(|theme, status| app_theme::primary_button_style(theme, status))
            .on_press_maybe(intake(UploadViewMessage::PickFile));

        let take_photo_btn = button(
            row![text("📷").size(16), text(translate(language, TextKey::TakePhoto)).size(15)]
                .spacing(8)
                .align_y(Alignment::Center),
        )
        .padding([12, 24])
        .style(|theme, status| app_theme::secondary_button_style(theme, status))
        .on_press_maybe(intake(UploadViewMessage::OpenCamera));

        let gallery_btn = button(
            row![text("🪴").size(16), text(translate(language, TextKey::BrowseGallery)).size(15)]
                .spacing(8)
                .align_y(Alignment::Center),
        )
        .padding([12, 24])
        .style(|theme, status| app_theme::secondary_button_style(theme, status))
        .on_press_maybe(intake(UploadViewMessage::OpenGallery));

        column![
            dropzone,
            row![choose_file_btn, take_photo_btn, gallery_btn].spacing(12),
        ]
        .spacing(16)
        .align_x(Alignment::Center)
        .into()
    }

    fn render_preview(&self, preview: &'a image::Handle) -> Element<'a, UploadViewMessage> {
        let language = self.language;

        let preview_image = image(preview.clone())
            .width(Length::Fill)
            .height(Length::Fixed(PREVIEW_HEIGHT));

        let clear_btn: Element<'a, UploadViewMessage> = if self.state.is_identifying() {
            Space::new().into()
        } else {
            button(text(format!("✕ {}", translate(language, TextKey::ClearPreview))).size(13))
                .padding([6, 14])
                .style(|theme, status| app_theme::danger_button_style(theme, status))
                .on_press(UploadViewMessage::ClearPreview)
                .into()
        };

        let status_section: Element<'a, UploadViewMessage> = match self.state {
            PipelineState::Identifying { progress } => column![
                text(translate(language, TextKey::Identifying)).size(14),
                progress_bar(
                    0.0..=f32::from(PROGRESS_COMPLETE_PERCENT),
                    f32::from(*progress)
                ),
            ]
            .spacing(8)
            .into(),
            PipelineState::Succeeded(result) => render_identification_result(result, language),
            _ => Space::new().into(),
        };

        column![
            row![Space::new().width(Length::Fill), clear_btn],
            preview_image,
            status_section,
        ]
        .spacing(12)
        .width(Length::Fill)
        .into()
    }
}
