//! JSON file backend

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{PersistenceError, ScoreStore};

/// On-disk record shape
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
struct BestRecord {
    #[serde(default)]
    best: u32,
}

/// Stores the best score as `{"best": N}` in a single file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the record, surfacing every failure
    pub fn read(&self) -> Result<u32, PersistenceError> {
        let json = fs::read_to_string(&self.path).map_err(|source| PersistenceError::Io {
            path: self.path.clone(),
            source,
        })?;
        let record: BestRecord =
            serde_json::from_str(&json).map_err(|source| PersistenceError::Json {
                path: self.path.clone(),
                source,
            })?;
        Ok(record.best)
    }

    /// Write the record through a sibling temp file so a crash never leaves half a file
    pub fn write(&self, best: u32) -> Result<(), PersistenceError> {
        let json = serde_json::to_string(&BestRecord { best }).map_err(|source| {
            PersistenceError::Json {
                path: self.path.clone(),
                source,
            }
        })?;

        let tmp = self.tmp_path();
        fs::write(&tmp, json).map_err(|source| PersistenceError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &self.path).map_err(|source| PersistenceError::Io {
            path: self.path.clone(),
            source,
        })
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl ScoreStore for JsonFileStore {
    fn load(&mut self) -> u32 {
        match self.read() {
            Ok(best) => {
                log::info!("Loaded best score {} from {}", best, self.path.display());
                best
            }
            Err(e) if e.is_not_found() => {
                log::info!("No best score at {}, starting fresh", self.path.display());
                0
            }
            Err(e) => {
                log::warn!("Ignoring unreadable best score: {e}");
                0
            }
        }
    }

    fn save(&mut self, best: u32) {
        match self.write(best) {
            Ok(()) => log::debug!("Best score {} saved to {}", best, self.path.display()),
            Err(e) => log::warn!("Best score not saved: {e}"),
        }
    }
}
