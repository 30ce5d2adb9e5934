//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no wall-clock time
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod block;
pub mod particles;
pub mod state;
pub mod tick;

pub use block::{Block, BlockColor, Direction, Overlap};
pub use particles::{Particle, ParticleBurst};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{DropOutcome, TickInput, tick};
