//! Raw input to logical actions
//!
//! The game understands three things: drop, restart and quit. The same
//! pointer press means "drop" while playing and "restart" after a game over.

use crate::sim::TickInput;

/// Keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    Escape,
    Other,
}

/// A platform event, already stripped of backend types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawEvent {
    KeyDown(Key),
    /// Primary mouse button, touch, or tap
    PointerDown,
    /// Window closed / process asked to exit
    Quit,
}

/// Logical game action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Drop,
    Restart,
    Quit,
}

/// Map one event given whether a game is in progress
pub fn translate(event: RawEvent, running: bool) -> Option<Action> {
    match event {
        RawEvent::KeyDown(Key::Space) if running => Some(Action::Drop),
        RawEvent::PointerDown if running => Some(Action::Drop),
        RawEvent::PointerDown => Some(Action::Restart),
        RawEvent::Quit => Some(Action::Quit),
        RawEvent::KeyDown(_) => None,
    }
}

/// Actions gathered over one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameActions {
    pub drop: bool,
    pub restart: bool,
    pub quit: bool,
}

impl FrameActions {
    /// Fold a frame's events; repeats collapse so at most one drop and one
    /// restart are applied per frame
    pub fn collect<'a>(events: impl IntoIterator<Item = &'a RawEvent>, running: bool) -> Self {
        let mut actions = Self::default();
        for &event in events {
            match translate(event, running) {
                Some(Action::Drop) => actions.drop = true,
                Some(Action::Restart) => actions.restart = true,
                Some(Action::Quit) => actions.quit = true,
                None => {}
            }
        }
        actions
    }

    /// Build the simulation input for this frame
    pub fn to_tick_input(self, autoplay: bool, autoplay_tolerance: f32) -> TickInput {
        TickInput {
            drop: self.drop,
            restart: self.restart,
            autoplay,
            autoplay_tolerance,
        }
    }
}
