//! Story browser configuration.
//!
//! Loaded once at startup from `<config dir>/cloud-storage-story/config.json`
//! when the file exists, then overridden from the environment:
//!
//! - `STORYBOOK_SEED`: seed for the mock data generator
//! - `STORYBOOK_LOCALE`: `en` or `zh-CN`
//! - `STORYBOOK_STORY`: id of the story selected on launch

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};

use crate::services::cloud_storage::Locale;
use crate::stories::{FixtureSettings, ViewportFrame};

const CONFIG_DIR: &str = "cloud-storage-story";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoryConfig {
    /// Seed for generated data; entropy when unset.
    pub seed: Option<u64>,
    pub locale: Locale,
    /// Story id selected on launch.
    pub initial_story: Option<String>,
    pub fixture: FixtureSettings,
    pub frame: ViewportFrame,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for StoryConfig {
    fn default() -> Self {
        Self {
            seed: None,
            locale: Locale::default(),
            initial_story: None,
            fixture: FixtureSettings::default(),
            frame: ViewportFrame::default(),
            window_width: 1280.,
            window_height: 860.,
        }
    }
}

impl StoryConfig {
    /// Location of the config file, if the platform has a config directory.
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load the config file and apply environment overrides.
    ///
    /// A missing file yields the defaults; an unreadable or invalid one is
    /// logged and also yields the defaults.
    pub fn load() -> Self {
        let mut config = match Self::path() {
            Some(path) if path.exists() => Self::load_from(&path).unwrap_or_else(|e| {
                tracing::warn!("Falling back to default config: {:#}", e);
                Self::default()
            }),
            _ => Self::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    /// Read and parse a config file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Apply `STORYBOOK_*` overrides looked up through `lookup`.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(seed) = lookup("STORYBOOK_SEED") {
            match seed.trim().parse::<u64>() {
                Ok(seed) => self.seed = Some(seed),
                Err(e) => tracing::warn!("Ignoring STORYBOOK_SEED={:?}: {}", seed, e),
            }
        }

        if let Some(tag) = lookup("STORYBOOK_LOCALE") {
            match Locale::from_tag(tag.trim()) {
                Some(locale) => self.locale = locale,
                None => tracing::warn!("Ignoring unknown STORYBOOK_LOCALE={:?}", tag),
            }
        }

        if let Some(story) = lookup("STORYBOOK_STORY") {
            self.initial_story = Some(story);
        }
    }
}
