//! Personal best tracking
//!
//! The best score outlives individual runs, so it is owned here and handed to
//! the simulation rather than kept in a global. Every change goes straight to
//! the backing [`ScoreStore`].

use crate::persistence::ScoreStore;

/// Highest score ever achieved, backed by a store
#[derive(Debug)]
pub struct PersonalBest<S: ScoreStore> {
    best: u32,
    store: S,
}

impl<S: ScoreStore> PersonalBest<S> {
    /// Load the current best from the store
    pub fn load(mut store: S) -> Self {
        let best = store.load();
        Self { best, store }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Check if a score would set a new record
    pub fn qualifies(&self, score: u32) -> bool {
        score > self.best
    }

    /// Offer a score; saves and returns true only when it beats the record
    pub fn record(&mut self, score: u32) -> bool {
        if !self.qualifies(score) {
            return false;
        }
        self.best = score;
        self.store.save(score);
        log::info!("New personal best: {}", score);
        true
    }

    /// Write the current best again (used on shutdown)
    pub fn flush(&mut self) {
        self.store.save(self.best);
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}
