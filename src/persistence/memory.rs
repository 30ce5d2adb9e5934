//! In-memory backend for tests and throwaway sessions

use super::ScoreStore;

/// Keeps the best score in memory and remembers every save
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    stored: Option<u32>,
    saves: Vec<u32>,
}

impl MemoryStore {
    /// Empty store (loads as 0)
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that already holds a best score
    pub fn with_best(best: u32) -> Self {
        Self {
            stored: Some(best),
            saves: Vec::new(),
        }
    }

    /// Every value passed to `save`, oldest first
    pub fn saves(&self) -> &[u32] {
        &self.saves
    }

    pub fn stored(&self) -> Option<u32> {
        self.stored
    }
}

impl ScoreStore for MemoryStore {
    fn load(&mut self) -> u32 {
        self.stored.unwrap_or(0)
    }

    fn save(&mut self, best: u32) {
        self.stored = Some(best);
        self.saves.push(best);
    }
}
