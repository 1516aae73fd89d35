use iced::widget::{button, column, container, image, row, text, Column};
use iced::{Alignment, ContentFit, Element, Length};

use crate::core::models::Language;
use crate::global_constants::SampleImage;
use crate::presentation::app_theme;
use crate::presentation::i18n::{translate, TextKey};

#[derive(Debug, Clone, PartialEq)]
pub enum GalleryViewMessage {
    Select(usize),
    Close,
}

const THUMBNAIL_SIZE: f32 = 72.0;

fn thumbnail_for(thumbnails: &[Option<image::Handle>], index: usize) -> Option<&image::Handle> {
    thumbnails.get(index).and_then(Option::as_ref)
}

fn render_thumbnail<'a>(handle: Option<&image::Handle>) -> Element<'a, GalleryViewMessage> {
    match handle {
        Some(handle) => image(handle.clone())
            .width(THUMBNAIL_SIZE)
            .height(THUMBNAIL_SIZE)
            .content_fit(ContentFit::Cover)
            .into(),
        None => container(text("🪴").size(28))
            .width(THUMBNAIL_SIZE)
            .height(THUMBNAIL_SIZE)
            .center_x(THUMBNAIL_SIZE)
            .center_y(THUMBNAIL_SIZE)
            .into(),
    }
}

pub fn render_gallery<'a>(
    samples: &'a [SampleImage],
    thumbnails: &'a [Option<image::Handle>],
    is_intake_enabled: bool,
    language: Language,
) -> Element<'a, GalleryViewMessage> {
    let header = column![
        text(translate(language, TextKey::GalleryTitle)).size(20),
        text(translate(language, TextKey::GallerySubtitle)).size(13),
    ]
    .spacing(4)
    .align_x(Alignment::Center);

    let sample_buttons = Column::with_children(samples.iter().enumerate().map(|(index, sample)| {
        button(
            row![
                render_thumbnail(thumbnail_for(thumbnails, index)),
                text(sample.alt).size(15)
            ]
            .spacing(14)
            .align_y(Alignment::Center),
        )
        .padding([8, 12])
        .width(Length::Fill)
        .style(|theme, status| app_theme::secondary_button_style(theme, status))
        .on_press_maybe(is_intake_enabled.then_some(GalleryViewMessage::Select(index)))
        .into()
    }))
    .spacing(8);

    let close_btn = button(text(translate(language, TextKey::GalleryClose)).size(14))
        .padding([8, 20])
        .style(|theme, status| app_theme::danger_button_style(theme, status))
        .on_press(GalleryViewMessage::Close);

    container(
        column![header, sample_buttons, close_btn]
            .spacing(16)
            .align_x(Alignment::Center),
    )
    .padding(24)
    .width(Length::Fill)
    .style(app_theme::card_container_style)
    .into()
}
