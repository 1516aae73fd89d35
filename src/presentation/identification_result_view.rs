use iced::widget::{column, container, row, text};
use iced::{Element, Length, Theme};

use crate::core::models::{IdentificationResult, Language};
use crate::presentation::app_theme;
use crate::presentation::i18n::{translate, TextKey};

/// Falls back to the localized "no information" copy for empty upstream fields.
pub fn text_or_fallback(value: &str, language: Language, fallback: TextKey) -> &str {
    if value.trim().is_empty() {
        translate(language, fallback)
    } else {
        value
    }
}

fn muted_text<'a, Message: 'a>(
    content: impl iced::widget::text::IntoFragment<'a>,
) -> Element<'a, Message> {
    text(content)
        .size(13)
        .style(|theme: &Theme| iced::widget::text::Style {
            color: Some(app_theme::muted_text_color(theme)),
        })
        .into()
}

fn care_card<'a, Message: 'a>(
    icon: &'a str,
    title: &'a str,
    body: &'a str,
) -> Element<'a, Message> {
    container(
        column![
            row![text(icon).size(16), text(title).size(14)].spacing(6),
            muted_text(body),
        ]
        .spacing(6),
    )
    .padding(12)
    .width(Length::FillPortion(1))
    .style(app_theme::card_container_style)
    .into()
}

pub fn render_identification_result<'a, Message: 'a>(
    result: &'a IdentificationResult,
    language: Language,
) -> Element<'a, Message> {
    let header = column![
        row![text("🌿").size(22), text(&result.name).size(22)].spacing(8),
        muted_text(result.common_names_label()),
        text(format!(
            "{}: {}%",
            translate(language, TextKey::Confidence),
            result.confidence_percent()
        ))
        .size(13),
    ]
    .spacing(4);

    let about = column![
        text(translate(language, TextKey::About)).size(15),
        muted_text(text_or_fallback(
            &result.description,
            language,
            TextKey::NoDescription
        )),
    ]
    .spacing(4);

    let taxonomy = column![
        text(translate(language, TextKey::Taxonomy)).size(15),
        muted_text(format!(
            "{}: {}",
            translate(language, TextKey::Family),
            result.taxonomy.family
        )),
        muted_text(format!(
            "{}: {}",
            translate(language, TextKey::Genus),
            result.taxonomy.genus
        )),
        muted_text(format!(
            "{}: {}",
            translate(language, TextKey::Species),
            result.taxonomy.species
        )),
    ]
    .spacing(2);

    let care = &result.care_instructions;
    let care_cards = row![
        care_card(
            "💧",
            translate(language, TextKey::Watering),
            text_or_fallback(&care.watering, language, TextKey::NoWateringInfo),
        ),
        care_card(
            "☀",
            translate(language, TextKey::Sunlight),
            text_or_fallback(&care.sunlight, language, TextKey::NoSunlightInfo),
        ),
        care_card(
            "🌱",
            translate(language, TextKey::Soil),
            text_or_fallback(&care.soil, language, TextKey::NoSoilInfo),
        ),
    ]
    .spacing(10);

    container(column![header, about, taxonomy, care_cards].spacing(16))
        .padding(20)
        .width(Length::Fill)
        .style(app_theme::card_container_style)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_care_field_uses_localized_fallback() {
        assert_eq!(
            text_or_fallback("", Language::English, TextKey::NoWateringInfo),
            "No watering information available"
        );
        assert_eq!(
            text_or_fallback("  ", Language::French, TextKey::NoSoilInfo),
            "Aucune information sur le sol"
        );
    }

    #[test]
    fn test_present_field_is_shown_verbatim() {
        assert_eq!(
            text_or_fallback("Bright indirect light", Language::Arabic, TextKey::NoSunlightInfo),
            "Bright indirect light"
        );
    }
}
