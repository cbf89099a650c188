use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::{debug, warn};

use crate::ui::settings::AppSettings;

pub fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("gptravel");
    path.push("settings.json");
    path
}

/// Loads settings, falling back to defaults when the file is missing or unreadable.
pub fn load_settings(path: &Path) -> AppSettings {
    let Ok(text) = fs::read_to_string(path) else {
        debug!("No settings at {}, using defaults", path.display());
        return AppSettings::default();
    };

    match serde_json::from_str(&text) {
        Ok(settings) => settings,
        Err(e) => {
            warn!("Ignoring malformed settings at {}: {}", path.display(), e);
            AppSettings::default()
        }
    }
}

pub fn save_settings(path: &Path, settings: &AppSettings) -> anyhow::Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_load_keeps_changes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut settings = AppSettings::default();
        settings.ui_scale = 1.25;
        settings.llm.model = "local-model".into();

        save_settings(&path, &settings).unwrap();
        assert_eq!(load_settings(&path), settings);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        assert_eq!(load_settings(&path), AppSettings::default());
    }

    #[test]
    fn malformed_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();

        assert_eq!(load_settings(&path), AppSettings::default());
    }
}
