//! Drop rule and per-frame tick
//!
//! Advances the simulation deterministically: given the same seed and the same
//! inputs on the same frames, two games stay identical.

use super::block::{Block, BlockColor, Direction};
use super::particles::ParticleBurst;
use super::state::{GameEvent, GamePhase, GameState};
use crate::persistence::ScoreStore;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Drop the falling block (ignored while game over)
    pub drop: bool,
    /// Reset to a fresh tower
    pub restart: bool,
    /// Idle/demo mode - drop automatically when lined up
    pub autoplay: bool,
    /// How far from the top block's x the autoplayer still drops
    pub autoplay_tolerance: f32,
}

/// Result of a drop request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Landed; `perfect` when nothing was trimmed
    Placed { perfect: bool },
    /// Missed the stack, game over
    Missed,
    /// Game already over, nothing changed
    Ignored,
}

impl<S: ScoreStore> GameState<S> {
    /// Drop the falling block onto the stack.
    ///
    /// The part of the block that overhangs the top of the stack is cut away
    /// and the next block spawns with the trimmed width, so the tower can only
    /// narrow. A drop with no positive overlap ends the game and leaves the
    /// stack, score and camera untouched.
    pub fn drop_block(&mut self) -> DropOutcome {
        if self.phase != GamePhase::Running {
            return DropOutcome::Ignored;
        }

        let last = self.top_block();
        let overlap = self.current.overlap_with(last);
        if !overlap.is_hit() {
            self.phase = GamePhase::GameOver;
            self.events.push(GameEvent::GameOver { score: self.score });
            log::info!("Game over at score {}", self.score);
            return DropOutcome::Missed;
        }

        let perfect = self.current.is_aligned_with(last);
        if perfect {
            let origin = Self::sparkle_origin(&self.current);
            self.bursts
                .push(ParticleBurst::spawn(origin, &self.tuning.sparkle, &mut self.rng));
        }

        let height = self.tuning.block_height;
        self.blocks.push(Block::fixed(
            overlap.x,
            self.current.y,
            overlap.width,
            height,
            self.current.color,
        ));
        self.score += 1;
        self.events.push(GameEvent::Placed {
            score: self.score,
            width: overlap.width,
            perfect,
        });

        if self.best.record(self.score) {
            self.events.push(GameEvent::NewBest { best: self.score });
        }

        // Next block spawns one row higher
        let new_y = self.current.y - height;
        if new_y - self.offset_y <= self.tuning.scroll_threshold {
            self.offset_y -= height;
            self.events.push(GameEvent::CameraScrolled {
                offset: self.offset_y,
            });
            log::debug!("Camera scrolled to {}", self.offset_y);
        }

        self.direction = self.direction.flipped();
        let start_x = match self.direction {
            Direction::Right => 0.0,
            Direction::Left => self.tuning.playfield_width - overlap.width,
        };
        self.current = Block::moving(
            start_x,
            new_y,
            overlap.width,
            height,
            self.direction,
            self.tuning.block_speed,
            BlockColor::for_score(self.score),
        );

        DropOutcome::Placed { perfect }
    }

    /// Advance one frame: the falling block moves while running, sparkles
    /// always animate.
    pub fn update(&mut self) {
        if self.phase == GamePhase::Running {
            self.current.step(self.tuning.playfield_width);
        }

        let decay = self.tuning.sparkle.decay;
        for burst in &mut self.bursts {
            burst.update(decay);
        }
        self.bursts.retain(|b| !b.is_empty());
    }

    /// Whether the autoplayer would drop right now
    fn autoplay_wants_drop(&self, tolerance: f32) -> bool {
        self.phase == GamePhase::Running
            && (self.current.x - self.top_block().x).abs() <= tolerance
    }
}

/// Advance the game by one frame.
///
/// Order: restart, then drop, then the autoplayer's drop, then `update`.
/// Events left over from earlier frames are dropped first.
pub fn tick<S: ScoreStore>(state: &mut GameState<S>, input: &TickInput) {
    state.events.clear();

    if input.restart {
        log::info!("Restarting (score {}, best {})", state.score(), state.best());
        state.reset();
    }

    if input.drop {
        state.drop_block();
    } else if input.autoplay && state.autoplay_wants_drop(input.autoplay_tolerance) {
        state.drop_block();
    }

    state.update();
}
