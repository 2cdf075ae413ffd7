//! Persistent application settings.

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::style::widgets::palette::ThemeMode;

const APP_DIR: &str = "resumind";
const SETTINGS_FILE: &str = "settings.json";
const CATALOG_FILE: &str = "resumes.json";

/// Settings stored between runs.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Light or dark appearance.
    #[serde(with = "theme_mode_serde")]
    pub theme_mode: ThemeMode,
    /// Root of the content store holding resumes and their preview images.
    pub content_dir: PathBuf,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::Dark,
            content_dir: dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_DIR),
        }
    }
}

impl AppSettings {
    /// Location of the resume catalog inside the content directory.
    #[must_use]
    pub fn catalog_path(&self) -> PathBuf {
        self.content_dir.join(CATALOG_FILE)
    }
}

mod theme_mode_serde {
    use super::ThemeMode;
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::trivially_copy_pass_by_ref)] // serde `with` signature
    pub fn serialize<S>(mode: &ThemeMode, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(match mode {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        })
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<ThemeMode, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(if s == "light" {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        })
    }
}

/// Default settings file location.
#[must_use]
pub fn settings_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(SETTINGS_FILE)
}

/// Loads settings, falling back to defaults when the file does not exist.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub async fn load_settings(path: &Path) -> anyhow::Result<AppSettings> {
    if !tokio::fs::try_exists(path).await.unwrap_or(false) {
        return Ok(AppSettings::default());
    }

    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("parsing {}", path.display()))
}

/// Writes settings, creating the parent directory as needed.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written.
pub async fn save_settings(path: &Path, settings: &AppSettings) -> anyhow::Result<()> {
    if let Some(dir) = path.parent() {
        tokio::fs::create_dir_all(dir)
            .await
            .with_context(|| format!("creating {}", dir.display()))?;
    }

    let contents = serde_json::to_string_pretty(settings).context("serializing settings")?;
    tokio::fs::write(path, contents)
        .await
        .with_context(|| format!("writing {}", path.display()))?;

    tracing::info!("Settings saved to {:?}", path);
    Ok(())
}
