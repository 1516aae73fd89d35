use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length};
use uuid::Uuid;

use crate::core::models::{Language, PipelineError};
use crate::presentation::app_theme;
use crate::presentation::i18n::{translate, TextKey};

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
}

impl Notification {
    pub fn from_error(error: &PipelineError) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: error.to_string(),
        }
    }
}

/// Renders the toast stack; pressing dismiss yields the toast id.
pub fn render_notifications(notifications: &[Notification], language: Language) -> Element<'_, Uuid> {
    let toasts = notifications.iter().map(|notification| {
        let dismiss_btn = button(text(translate(language, TextKey::Dismiss)).size(12))
            .padding([4, 10])
            .style(|theme, status| app_theme::secondary_button_style(theme, status))
            .on_press(notification.id);

        let body = column![
            text(translate(language, TextKey::ErrorTitle)).size(14),
            text(&notification.message).size(13),
        ]
        .spacing(4)
        .width(Length::Fill);

        container(
            row![body, dismiss_btn]
                .spacing(12)
                .align_y(Alignment::Center),
        )
        .padding([10, 14])
        .width(Length::Fill)
        .style(app_theme::error_toast_style)
        .into()
    });

    if notifications.is_empty() {
        return Space::new().into();
    }

    column(toasts).spacing(8).width(Length::Fill).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_error_uses_user_facing_message() {
        let notification = Notification::from_error(&PipelineError::NoPlantDetected);

        assert!(notification.message.starts_with("No plant detected"));
    }

    #[test]
    fn test_each_notification_gets_a_unique_id() {
        let first = Notification::from_error(&PipelineError::NoPlantDetected);
        let second = Notification::from_error(&PipelineError::NoPlantDetected);

        assert_ne!(first.id, second.id);
    }
}
