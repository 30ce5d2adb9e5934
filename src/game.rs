//! Frame driver
//!
//! One call per frame: collect input, tick the simulation once, report what
//! happened. Rendering reads [`Game::scene`] afterwards.

use crate::highscores::PersonalBest;
use crate::persistence::ScoreStore;
use crate::platform::{FrameActions, RawEvent};
use crate::renderer::Scene;
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, tick};
use crate::tuning::Tuning;

/// Whether the driver loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    Continue,
    Quit,
}

/// Game instance holding all state
#[derive(Debug)]
pub struct Game<S: ScoreStore> {
    state: GameState<S>,
    settings: Settings,
    frames: u64,
    games_played: u32,
}

impl<S: ScoreStore> Game<S> {
    /// Start a game; unplayable tuning is replaced by the defaults
    pub fn new(mut settings: Settings, store: S) -> Self {
        if let Err(e) = settings.tuning.validate() {
            log::warn!("Invalid tuning: {e}; using defaults");
            settings.tuning = Tuning::default();
        }
        let seed = settings.effective_seed();
        log::debug!("Sparkle seed {}", seed);
        let state = GameState::new(settings.tuning.clone(), PersonalBest::load(store), seed);
        Self {
            state,
            settings,
            frames: 0,
            games_played: 0,
        }
    }

    /// Run one frame against this frame's events
    pub fn frame(&mut self, events: &[RawEvent]) -> FrameStatus {
        let actions = FrameActions::collect(events, self.state.is_running());
        if actions.quit {
            return FrameStatus::Quit;
        }

        let input = actions.to_tick_input(self.settings.autoplay, self.settings.autoplay_tolerance);
        tick(&mut self.state, &input);
        self.frames += 1;

        for event in self.state.take_events() {
            match event {
                GameEvent::GameOver { score } => {
                    self.games_played += 1;
                    log::info!(
                        "Run {} over after {} frames: score {}, best {}",
                        self.games_played,
                        self.frames,
                        score,
                        self.state.best()
                    );
                }
                GameEvent::Placed { perfect: true, score, .. } => {
                    log::debug!("Perfect drop at score {}", score);
                }
                _ => {}
            }
        }

        FrameStatus::Continue
    }

    /// Draw list for the current state
    pub fn scene(&self) -> Scene {
        Scene::build(&self.state)
    }

    /// Final save of the best score
    pub fn shutdown(&mut self) {
        log::info!("Shutting down, best score {}", self.state.best());
        self.state.personal_best_mut().flush();
    }

    pub fn state(&self) -> &GameState<S> {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Frames ticked so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Runs that ended in a game over
    pub fn games_played(&self) -> u32 {
        self.games_played
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use crate::platform::Key;

    fn manual_game(best: u32) -> Game<MemoryStore> {
        let settings = Settings {
            seed: Some(3),
            autoplay: false,
            ..Default::default()
        };
        Game::new(settings, MemoryStore::with_best(best))
    }

    #[test]
    fn test_idle_frames_only_move_block() {
        let mut game = manual_game(0);
        for _ in 0..5 {
            assert_eq!(game.frame(&[]), FrameStatus::Continue);
        }
        assert_eq!(game.frames(), 5);
        assert_eq!(game.state().current_block().x, 20.0);
        assert_eq!(game.state().score(), 0);
    }

    #[test]
    fn test_early_drop_misses_then_pointer_restarts() {
        let mut game = manual_game(0);
        // Block at x=0 spans [0,133); base starts at 134
        game.frame(&[RawEvent::KeyDown(Key::Space)]);
        assert!(!game.state().is_running());
        assert_eq!(game.games_played(), 1);
        assert!(game.scene().hud.game_over_line.is_some());

        // Space does nothing while over
        game.frame(&[RawEvent::KeyDown(Key::Space)]);
        assert!(!game.state().is_running());

        game.frame(&[RawEvent::PointerDown]);
        assert!(game.state().is_running());
        assert_eq!(game.state().blocks().len(), 1);
    }

    #[test]
    fn test_one_drop_per_frame() {
        let mut game = manual_game(0);
        // Slide to x=100 so the first drop lands
        for _ in 0..25 {
            game.frame(&[]);
        }
        game.frame(&[RawEvent::KeyDown(Key::Space), RawEvent::PointerDown]);
        assert_eq!(game.state().score(), 1);
        assert_eq!(game.state().blocks().len(), 2);
    }

    #[test]
    fn test_quit_skips_tick_and_shutdown_saves() {
        let mut game = manual_game(9);
        assert_eq!(game.frame(&[RawEvent::Quit]), FrameStatus::Quit);
        assert_eq!(game.frames(), 0);
        game.shutdown();
        assert_eq!(game.state().personal_best().store().saves(), &[9]);
    }

    #[test]
    fn test_unplayable_tuning_replaced_by_defaults() {
        let mut settings = Settings {
            seed: Some(5),
            autoplay: false,
            ..Default::default()
        };
        settings.tuning.sparkle.radius_min = 5;
        settings.tuning.sparkle.radius_max = 2;
        let mut game = Game::new(settings, MemoryStore::new());
        assert_eq!(game.settings().tuning, Tuning::default());
        assert_eq!(game.state().tuning(), &Tuning::default());

        // A perfect drop spawns sparkles from the (now valid) radius range
        game.state.current.x = game.state().top_block().x;
        game.frame(&[RawEvent::KeyDown(Key::Space)]);
        assert_eq!(game.state().score(), 1);
        assert_eq!(game.state().bursts().len(), 1);
    }

    #[test]
    fn test_autoplay_session_builds_a_tower() {
        let settings = Settings {
            seed: Some(11),
            ..Default::default()
        };
        let mut game = Game::new(settings, MemoryStore::new());
        while game.state().is_running() && game.frames() < 5_000 {
            game.frame(&[]);
        }
        assert!(game.state().score() > 0);
        assert_eq!(game.state().score() as usize, game.state().blocks().len() - 1);
        assert_eq!(game.state().best(), game.state().score());
    }
}
