//! User settings stored as settings.json in the app data directory

use crate::constants::APP_NAME;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Window geometry restored on start. The prediction endpoint is fixed and
/// never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join("settings.json");
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join("settings.json");
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }
}

/// Directory holding settings.json and the logs folder
pub fn data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("plant-doctor-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = scratch_dir("missing");
        let _ = std::fs::remove_file(dir.join("settings.json"));
        assert_eq!(Settings::load(&dir), Settings::default());
    }

    #[test]
    fn partial_file_keeps_defaults_for_absent_fields() {
        let dir = scratch_dir("partial");
        std::fs::write(dir.join("settings.json"), r#"{"window_w": 900.0}"#).unwrap();
        let settings = Settings::load(&dir);
        assert_eq!(settings.window_w, Some(900.0));
        assert_eq!(settings.window_x, None);
    }

    #[test]
    fn garbage_file_falls_back_to_defaults() {
        let dir = scratch_dir("garbage");
        std::fs::write(dir.join("settings.json"), "not json").unwrap();
        assert_eq!(Settings::load(&dir), Settings::default());
    }

    #[test]
    fn save_then_load_preserves_geometry() {
        let dir = scratch_dir("save");
        let settings = Settings {
            window_x: Some(10.0),
            window_y: Some(20.0),
            window_w: Some(900.0),
            window_h: Some(700.0),
        };
        settings.save(&dir);
        assert_eq!(Settings::load(&dir), settings);
    }

    #[test]
    fn endpoint_is_never_persisted() {
        let dir = scratch_dir("endpoint");
        std::fs::write(
            dir.join("settings.json"),
            r#"{"window_w": 800.0, "endpoint": "http://10.0.0.5:9000/predict/"}"#,
        )
        .unwrap();

        let settings = Settings::load(&dir);
        assert_eq!(settings.window_w, Some(800.0));
        settings.save(&dir);

        let saved = std::fs::read_to_string(dir.join("settings.json")).unwrap();
        assert!(!saved.contains("endpoint"), "saved settings: {}", saved);
    }
}
