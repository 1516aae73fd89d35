use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use super::FacingMode;
use crate::global_constants::{LOG_TAG_SETTINGS, SETTINGS_DIRECTORY_NAME, SETTINGS_FILE_NAME};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum ThemeMode {
    Dark,
    #[default]
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Dark => write!(f, "Dark"),
            ThemeMode::Light => write!(f, "Light"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Language {
    #[default]
    English,
    French,
    Arabic,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::English, Language::French, Language::Arabic];

    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::French => "fr",
            Language::Arabic => "ar",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::English => write!(f, "English"),
            Language::French => write!(f, "Français"),
            Language::Arabic => write!(f, "العربية"),
        }
    }
}

/// Application context handed explicitly to the orchestrator and views.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserSettings {
    #[serde(default)]
    pub theme_mode: ThemeMode,
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub preferred_facing_mode: FacingMode,
}

impl UserSettings {
    pub fn load_from(settings_path: &Path) -> anyhow::Result<Self> {
        if !settings_path.exists() {
            log::info!("{} No settings file found, using defaults", LOG_TAG_SETTINGS);
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(settings_path)
            .with_context(|| format!("failed to read settings from {:?}", settings_path))?;
        let settings: UserSettings = serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse settings from {:?}", settings_path))?;

        log::info!("{} Loaded settings from {:?}", LOG_TAG_SETTINGS, settings_path);
        log::debug!(
            "{} theme={}, language={}, facing_mode={}",
            LOG_TAG_SETTINGS,
            settings.theme_mode,
            settings.language.code(),
            settings.preferred_facing_mode
        );

        Ok(settings)
    }

    pub fn save_to(&self, settings_path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = settings_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create settings directory {:?}", parent))?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(settings_path, contents)
            .with_context(|| format!("failed to write settings to {:?}", settings_path))?;

        log::info!("{} Saved settings to {:?}", LOG_TAG_SETTINGS, settings_path);
        Ok(())
    }

    pub fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(SETTINGS_DIRECTORY_NAME);

        Ok(config_dir.join(SETTINGS_FILE_NAME))
    }
}
