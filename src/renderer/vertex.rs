//! Vertex types for 2D rendering

use crate::sim::BlockColor;

/// Simple 2D vertex with position and color, in screen space
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const GREY: [f32; 4] = [180.0 / 255.0, 180.0 / 255.0, 180.0 / 255.0, 1.0];
    pub const BLUE: [f32; 4] = [70.0 / 255.0, 130.0 / 255.0, 180.0 / 255.0, 1.0];
    pub const OUTLINE: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const SPARKLE: [f32; 4] = [1.0, 215.0 / 255.0, 0.0, 1.0]; // Gold
    pub const BACKGROUND: [f32; 4] = [165.0 / 255.0, 210.0 / 255.0, 140.0 / 255.0, 1.0];
    pub const HUD_PANEL: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}

/// Fill color for a block
pub fn block_color(color: BlockColor) -> [f32; 4] {
    match color {
        BlockColor::Grey => colors::GREY,
        BlockColor::Blue => colors::BLUE,
    }
}
