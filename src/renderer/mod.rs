//! Headless rendering module
//!
//! Builds screen-space triangle lists and HUD text from the simulation; any
//! GPU, window or terminal backend can consume the result.

pub mod scene;
pub mod shapes;
pub mod vertex;

pub use scene::{Hud, Scene, background_scroll};
pub use vertex::Vertex;
