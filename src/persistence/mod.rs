//! Best-score persistence
//!
//! Features:
//! - `{"best": <integer>}` JSON record
//! - Write to a temporary file, then rename over the old record
//! - Missing or corrupt records read back as 0

pub mod file;
pub mod memory;

use std::path::PathBuf;

use thiserror::Error;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// Failures reading or writing a stored record
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to access {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl PersistenceError {
    /// True when the record simply does not exist yet
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

/// Durable home of the best score
///
/// Neither method reports failure: an unreadable record counts as 0 and a
/// failed write is logged and otherwise ignored.
pub trait ScoreStore: std::fmt::Debug {
    /// Read the stored best score, 0 if absent or unparseable
    fn load(&mut self) -> u32;

    /// Overwrite the stored best score
    fn save(&mut self, best: u32);
}
