use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length};

use crate::core::models::{FacingMode, Language};
use crate::presentation::app_theme;
use crate::presentation::i18n::{translate, TextKey};

#[derive(Debug, Clone, PartialEq)]
pub enum CameraPanelState {
    Opening,
    Ready(FacingMode),
    Capturing,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum CameraViewMessage {
    Capture,
    ToggleFacingMode,
    Close,
}

fn facing_mode_label(facing_mode: FacingMode, language: Language) -> &'static str {
    match facing_mode {
        FacingMode::User => translate(language, TextKey::CameraFront),
        FacingMode::Environment => translate(language, TextKey::CameraBack),
    }
}

pub fn render_camera_panel(
    state: &CameraPanelState,
    is_intake_enabled: bool,
    language: Language,
) -> Element<'_, CameraViewMessage> {
    let title = row![text("📷").size(22), text(translate(language, TextKey::CameraTitle)).size(20)]
        .spacing(8)
        .align_y(Alignment::Center);

    let status = match state {
        CameraPanelState::Opening => text(translate(language, TextKey::CameraOpening)),
        CameraPanelState::Ready(facing_mode) => text(facing_mode_label(*facing_mode, language)),
        CameraPanelState::Capturing => text(translate(language, TextKey::CameraCapturing)),
        CameraPanelState::Failed(message) => text(message).style(|theme: &iced::Theme| {
            iced::widget::text::Style {
                color: Some(theme.palette().danger),
            }
        }),
    }
    .size(14);

    let is_ready = is_intake_enabled && matches!(state, CameraPanelState::Ready(_));

    let capture_btn = button(text(translate(language, TextKey::CameraCapture)).size(15))
        .padding([12, 28])
        .style(|theme, status| app_theme::primary_button_style(theme, status))
        .on_press_maybe(is_ready.then_some(CameraViewMessage::Capture));

    let switch_btn = button(text(format!("🔄 {}", translate(language, TextKey::CameraSwitch))).size(15))
        .padding([12, 20])
        .style(|theme, status| app_theme::secondary_button_style(theme, status))
        .on_press_maybe(is_ready.then_some(CameraViewMessage::ToggleFacingMode));

    let close_btn = button(text(translate(language, TextKey::CameraClose)).size(15))
        .padding([12, 20])
        .style(|theme, status| app_theme::danger_button_style(theme, status))
        .on_press(CameraViewMessage::Close);

    container(
        column![
            title,
            status,
            row![capture_btn, switch_btn, close_btn].spacing(12),
        ]
        .spacing(16)
        .align_x(Alignment::Center),
    )
    .padding(24)
    .width(Length::Fill)
    .style(app_theme::card_container_style)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facing_mode_label_is_localized() {
        assert_eq!(facing_mode_label(FacingMode::User, Language::English), "Front camera");
        assert_eq!(
            facing_mode_label(FacingMode::Environment, Language::French),
            "Caméra arrière"
        );
    }
}
