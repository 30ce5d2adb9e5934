//! Stack Tower - a single-screen tower stacking arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (drop/trim rule, camera scroll, sparkles)
//! - `renderer`: Headless draw-list builder for any presentation backend
//! - `platform`: Raw input events to logical actions
//! - `persistence`: Best-score storage backends
//! - `tuning`: Data-driven game balance

pub mod game;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use game::{FrameStatus, Game};
pub use highscores::PersonalBest;
pub use persistence::{JsonFileStore, MemoryStore, PersistenceError, ScoreStore};
pub use settings::Settings;
pub use tuning::{SparkleTuning, Tuning};

/// Game configuration constants
pub mod consts {
    /// Target frame rate of the driver loop
    pub const FPS: u32 = 60;

    /// Playfield dimensions (world units, y grows downward)
    pub const PLAYFIELD_WIDTH: f32 = 400.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Block defaults
    pub const BLOCK_HEIGHT: f32 = 35.0;
    /// Horizontal distance a falling block travels per tick
    pub const BLOCK_SPEED: f32 = 4.0;

    /// Camera scrolls once a new block would spawn this close to the top of the view
    pub const SCROLL_THRESHOLD: f32 = 200.0;

    /// Sparkle defaults
    pub const SPARKLE_COUNT: usize = 10;
    pub const SPARKLE_DECAY: f32 = 0.1;

    /// Default best-score file name
    pub const RECORD_FILE: &str = "pr.json";
}
