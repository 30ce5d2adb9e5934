//! Game state and core simulation types
//!
//! The tower is a bottom-to-top list of placed blocks with the immovable base
//! at index 0. Exactly one block is falling at a time; it freezes in place
//! when a drop misses.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::block::{Block, BlockColor, Direction};
use super::particles::ParticleBurst;
use crate::highscores::PersonalBest;
use crate::persistence::ScoreStore;
use crate::tuning::Tuning;

/// Current phase of play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Falling block oscillates and drops are accepted
    Running,
    /// A drop missed; only a restart leaves this phase
    GameOver,
}

/// Something worth reacting to outside the simulation (sound, logs, HUD flashes)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// A drop landed and a new block joined the stack
    Placed { score: u32, width: f32, perfect: bool },
    /// The score passed the previous personal best
    NewBest { best: u32 },
    /// The camera moved up one block height
    CameraScrolled { offset: f32 },
    /// A drop missed the stack
    GameOver { score: u32 },
    /// State was reinitialized
    Restarted,
}

/// Complete game state
#[derive(Debug)]
pub struct GameState<S: ScoreStore> {
    pub(crate) tuning: Tuning,
    pub(crate) rng: Pcg32,
    /// Placed blocks, bottom to top
    pub(crate) blocks: Vec<Block>,
    /// Falling block; frozen where it missed once the game is over
    pub(crate) current: Block,
    /// Camera offset, <= 0, grows more negative as the tower climbs
    pub(crate) offset_y: f32,
    /// Direction the next falling block will start out in
    pub(crate) direction: Direction,
    pub(crate) score: u32,
    pub(crate) phase: GamePhase,
    pub(crate) bursts: Vec<ParticleBurst>,
    pub(crate) best: PersonalBest<S>,
    pub(crate) events: Vec<GameEvent>,
}

impl<S: ScoreStore> GameState<S> {
    /// Create a new game; `seed` drives the sparkle generator
    pub fn new(tuning: Tuning, best: PersonalBest<S>, seed: u64) -> Self {
        let mut state = Self {
            current: Self::first_block(&tuning),
            blocks: Vec::new(),
            tuning,
            rng: Pcg32::seed_from_u64(seed),
            offset_y: 0.0,
            direction: Direction::Right,
            score: 0,
            phase: GamePhase::Running,
            bursts: Vec::new(),
            best,
            events: Vec::new(),
        };
        state.blocks.push(Self::base_block(&state.tuning));
        state
    }

    /// Throw away the tower and start over. The best score and the random
    /// stream carry over.
    pub fn reset(&mut self) {
        self.blocks.clear();
        self.blocks.push(Self::base_block(&self.tuning));
        self.current = Self::first_block(&self.tuning);
        self.offset_y = 0.0;
        self.direction = Direction::Right;
        self.score = 0;
        self.bursts.clear();
        self.phase = GamePhase::Running;
        self.events.push(GameEvent::Restarted);
    }

    fn base_block(tuning: &Tuning) -> Block {
        Block::fixed(
            tuning.base_x(),
            tuning.playfield_height - tuning.block_height,
            tuning.starting_width(),
            tuning.block_height,
            BlockColor::Blue,
        )
    }

    fn first_block(tuning: &Tuning) -> Block {
        Block::moving(
            0.0,
            tuning.playfield_height - tuning.block_height * 2.0,
            tuning.starting_width(),
            tuning.block_height,
            Direction::Right,
            tuning.block_speed,
            BlockColor::for_score(0),
        )
    }

    /// Where a sparkle burst for a drop of `block` is centered
    pub(crate) fn sparkle_origin(block: &Block) -> Vec2 {
        Vec2::new(block.center_x(), block.y)
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Placed blocks, bottom (base) to top
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Most recently placed block
    pub fn top_block(&self) -> &Block {
        // The base block is pushed on construction and reset and never removed
        &self.blocks[self.blocks.len() - 1]
    }

    /// The falling block while the game is running
    pub fn falling_block(&self) -> Option<&Block> {
        self.is_running().then_some(&self.current)
    }

    /// The falling block, or where it froze after a miss
    pub fn current_block(&self) -> &Block {
        &self.current
    }

    pub fn offset_y(&self) -> f32 {
        self.offset_y
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best(&self) -> u32 {
        self.best.best()
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Live sparkle bursts
    pub fn bursts(&self) -> &[ParticleBurst] {
        &self.bursts
    }

    pub fn personal_best(&self) -> &PersonalBest<S> {
        &self.best
    }

    pub fn personal_best_mut(&mut self) -> &mut PersonalBest<S> {
        &mut self.best
    }

    /// Drain events raised since the last call.
    ///
    /// [`tick`](super::tick) discards undrained events from earlier frames, so
    /// after a tick this holds only that tick's events. Callers driving
    /// `drop_block`/`reset` directly must drain it themselves.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    fn new_state() -> GameState<MemoryStore> {
        GameState::new(
            Tuning::default(),
            PersonalBest::load(MemoryStore::with_best(3)),
            12345,
        )
    }

    #[test]
    fn test_initial_layout() {
        let state = new_state();
        assert_eq!(state.blocks().len(), 1);
        assert_eq!(state.score(), 0);
        assert_eq!(state.best(), 3);
        assert_eq!(state.offset_y(), 0.0);
        assert!(state.is_running());
        assert!(state.bursts().is_empty());

        let base = state.top_block();
        assert_eq!((base.x, base.y, base.width), (134.0, 565.0, 133.0));
        assert!(!base.moving);
        assert_eq!(base.color, BlockColor::Blue);

        let falling = state.falling_block().unwrap();
        assert_eq!((falling.x, falling.y, falling.width), (0.0, 530.0, 133.0));
        assert!(falling.moving);
        assert_eq!(falling.direction, Direction::Right);
        assert_eq!(falling.color, BlockColor::Grey);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut state = new_state();
        state.blocks.push(Block::fixed(0.0, 530.0, 50.0, 35.0, BlockColor::Grey));
        state.score = 1;
        state.offset_y = -35.0;
        state.direction = Direction::Left;
        state.phase = GamePhase::GameOver;
        state.current.x = 77.0;

        state.reset();

        let fresh = new_state();
        assert_eq!(state.blocks(), fresh.blocks());
        assert_eq!(state.current_block(), fresh.current_block());
        assert_eq!(state.score(), 0);
        assert_eq!(state.offset_y(), 0.0);
        assert!(state.is_running());
        assert_eq!(state.take_events(), vec![GameEvent::Restarted]);
    }

    #[test]
    fn test_falling_block_hidden_after_game_over() {
        let mut state = new_state();
        state.phase = GamePhase::GameOver;
        assert!(state.falling_block().is_none());
        assert_eq!(state.current_block().x, 0.0);
    }
}
