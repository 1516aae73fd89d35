use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme};

use crate::core::models::ThemeMode;

const LEAF_GREEN: Color = Color::from_rgb(0.165, 0.561, 0.318);
const LEAF_GREEN_HOVER: Color = Color::from_rgb(0.224, 0.663, 0.392);
const LEAF_GREEN_PRESSED: Color = Color::from_rgb(0.118, 0.435, 0.243);

const BUTTON_RADIUS: f32 = 6.0;
const CARD_RADIUS: f32 = 10.0;

pub fn get_theme(mode: &ThemeMode) -> Theme {
    match mode {
        ThemeMode::Dark => Theme::custom(
            "Dark".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.067, 0.094, 0.078),
                text: Color::from_rgb(0.93, 0.96, 0.93),
                primary: Color::from_rgb(0.31, 0.76, 0.47),
                success: Color::from_rgb(0.2, 0.9, 0.4),
                danger: Color::from_rgb(1.0, 0.35, 0.35),
                warning: Color::from_rgb(1.0, 0.7, 0.0),
            },
        ),
        ThemeMode::Light => Theme::custom(
            "Light".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.96, 0.98, 0.95),
                text: Color::from_rgb(0.1, 0.14, 0.1),
                primary: LEAF_GREEN,
                success: Color::from_rgb(0.1, 0.7, 0.3),
                danger: Color::from_rgb(0.86, 0.2, 0.2),
                warning: Color::from_rgb(0.9, 0.6, 0.0),
            },
        ),
    }
}

fn solid_button(background: Color, text_color: Color, border_color: Color, snap: bool) -> button::Style {
    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: BUTTON_RADIUS.into(),
        },
        shadow: Shadow::default(),
        snap,
    }
}

fn disabled_button() -> button::Style {
    solid_button(
        Color::from_rgb(0.3, 0.3, 0.3),
        Color::from_rgb(0.5, 0.5, 0.5),
        Color::from_rgb(0.4, 0.4, 0.4),
        false,
    )
}

pub fn primary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active => solid_button(LEAF_GREEN, Color::WHITE, LEAF_GREEN, false),
        button::Status::Hovered => {
            solid_button(LEAF_GREEN_HOVER, Color::WHITE, LEAF_GREEN_HOVER, false)
        }
        button::Status::Pressed => {
            solid_button(LEAF_GREEN_PRESSED, Color::WHITE, LEAF_GREEN_PRESSED, true)
        }
        button::Status::Disabled => disabled_button(),
    }
}

pub fn secondary_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.palette();
    let outline = Color { a: 0.5, ..palette.primary };

    match status {
        button::Status::Active => solid_button(Color::TRANSPARENT, palette.text, outline, false),
        button::Status::Hovered => solid_button(
            Color { a: 0.12, ..palette.primary },
            palette.text,
            palette.primary,
            false,
        ),
        button::Status::Pressed => solid_button(
            Color { a: 0.2, ..palette.primary },
            palette.text,
            palette.primary,
            true,
        ),
        button::Status::Disabled => disabled_button(),
    }
}

pub fn danger_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let red = Color::from_rgb(0.8, 0.25, 0.25);

    match status {
        button::Status::Active => solid_button(red, Color::WHITE, red, false),
        button::Status::Hovered => {
            let hovered = Color::from_rgb(0.9, 0.35, 0.35);
            solid_button(hovered, Color::WHITE, hovered, false)
        }
        button::Status::Pressed => {
            let pressed = Color::from_rgb(0.7, 0.2, 0.2);
            solid_button(pressed, Color::WHITE, pressed, true)
        }
        button::Status::Disabled => disabled_button(),
    }
}

pub fn card_container_style(theme: &Theme) -> container::Style {
    let palette = theme.palette();

    container::Style {
        background: Some(Background::Color(Color { a: 0.06, ..palette.text })),
        border: Border {
            color: Color { a: 0.15, ..palette.text },
            width: 1.0,
            radius: CARD_RADIUS.into(),
        },
        ..Default::default()
    }
}

pub fn dropzone_container_style(theme: &Theme) -> container::Style {
    let palette = theme.palette();

    container::Style {
        background: Some(Background::Color(Color { a: 0.05, ..palette.primary })),
        border: Border {
            color: Color { a: 0.6, ..palette.primary },
            width: 2.0,
            radius: CARD_RADIUS.into(),
        },
        ..Default::default()
    }
}

pub fn error_toast_style(theme: &Theme) -> container::Style {
    let danger = theme.palette().danger;

    container::Style {
        background: Some(Background::Color(danger)),
        text_color: Some(Color::WHITE),
        border: Border {
            color: danger,
            width: 1.0,
            radius: BUTTON_RADIUS.into(),
        },
        ..Default::default()
    }
}

pub fn muted_text_color(theme: &Theme) -> Color {
    Color { a: 0.65, ..theme.palette().text }
}
