//! Game settings and preferences
//!
//! Loaded from an optional JSON file; any missing field keeps its default.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::{FPS, RECORD_FILE};
use crate::persistence::PersistenceError;
use crate::tuning::Tuning;

/// Runtime settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Gameplay geometry
    pub tuning: Tuning,
    /// Where the best score is kept
    pub record_path: PathBuf,
    /// Sparkle seed; random per process when absent
    pub seed: Option<u64>,
    /// Target frame rate of the driver loop; 0 runs unthrottled
    pub fps: u32,

    // === Idle/demo ===
    /// Let the built-in player drop blocks
    pub autoplay: bool,
    /// Autoplayer drops once within this distance of the top block
    pub autoplay_tolerance: f32,
    /// Frame cap for headless sessions
    pub max_frames: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tuning: Tuning::default(),
            record_path: PathBuf::from(RECORD_FILE),
            seed: None,
            fps: FPS,
            autoplay: true,
            autoplay_tolerance: 4.0,
            max_frames: 60 * 60 * 10,
        }
    }
}

impl Settings {
    /// Parse settings from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read settings from a file, surfacing every failure
    pub fn read(path: &Path) -> Result<Self, PersistenceError> {
        let json = fs::read_to_string(path).map_err(|source| PersistenceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json).map_err(|source| PersistenceError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load settings, falling back to defaults on a missing, corrupt or
    /// unplayable file
    pub fn load(path: &Path) -> Self {
        match Self::read(path) {
            Ok(settings) => match settings.tuning.validate() {
                Ok(()) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid tuning in {}: {e}; using defaults", path.display());
                    Self::default()
                }
            },
            Err(e) if e.is_not_found() => {
                log::info!("No settings at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: &Path) -> Result<(), PersistenceError> {
        let json = serde_json::to_string_pretty(self).map_err(|source| PersistenceError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json).map_err(|source| PersistenceError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Seed for this session
    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random::<u64>)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("stack-tower-settings-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir.join(name)
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(Settings::from_json("{}").unwrap(), Settings::default());
    }

    #[test]
    fn test_partial_override() {
        let settings =
            Settings::from_json(r#"{"seed": 7, "tuning": {"playfield_width": 600.0}}"#).unwrap();
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.effective_seed(), 7);
        assert_eq!(settings.tuning.playfield_width, 600.0);
        assert_eq!(settings.tuning.block_height, crate::consts::BLOCK_HEIGHT);
        assert_eq!(settings.record_path, PathBuf::from(RECORD_FILE));
        assert_eq!(settings.fps, FPS);
    }

    #[test]
    fn test_fps_zero_means_unthrottled() {
        let settings = Settings::from_json(r#"{"fps": 0}"#).unwrap();
        assert_eq!(crate::platform::FramePacer::new(settings.fps).period(), None);
    }

    #[test]
    fn test_save_and_load() {
        let path = scratch_path("settings.json");
        let settings = Settings {
            autoplay: false,
            max_frames: 10,
            ..Default::default()
        };
        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path), settings);
    }

    #[test]
    fn test_unplayable_tuning_falls_back() {
        let path = scratch_path("bad_tuning.json");
        fs::write(&path, r#"{"tuning": {"block_height": -1.0}, "fps": 30}"#).unwrap();
        assert!(Settings::read(&path).is_ok());
        assert_eq!(Settings::load(&path), Settings::default());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let path = scratch_path("does_not_exist.json");
        let _ = fs::remove_file(&path);
        assert!(Settings::read(&path).unwrap_err().is_not_found());
        assert_eq!(Settings::load(&path), Settings::default());
    }
}
