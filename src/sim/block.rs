//! Block geometry and horizontal oscillation
//!
//! Blocks are axis-aligned spans in world space: `x` is the left edge, `y`
//! the top edge, and y grows downward.

use serde::{Deserialize, Serialize};

/// Horizontal travel direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    Left,
    #[default]
    Right,
}

impl Direction {
    /// -1 for left, +1 for right
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }

    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Two-entry block palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockColor {
    Grey,
    Blue,
}

impl BlockColor {
    /// Falling blocks alternate colors with the score's parity
    pub fn for_score(score: u32) -> Self {
        if score % 2 == 0 {
            BlockColor::Grey
        } else {
            BlockColor::Blue
        }
    }
}

/// Horizontal intersection of two blocks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlap {
    /// Left edge of the shared span
    pub x: f32,
    /// Length of the shared span; zero or negative when the blocks miss
    pub width: f32,
}

impl Overlap {
    #[inline]
    pub fn is_hit(&self) -> bool {
        self.width > 0.0
    }
}

/// A block, either falling (moving) or placed in the stack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub moving: bool,
    pub direction: Direction,
    /// Distance travelled per tick while moving
    pub speed: f32,
    pub color: BlockColor,
}

impl Block {
    /// A falling block
    pub fn moving(
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        direction: Direction,
        speed: f32,
        color: BlockColor,
    ) -> Self {
        Self {
            x,
            y,
            width,
            height,
            moving: true,
            direction,
            speed,
            color,
        }
    }

    /// A static block (the base, or one placed by a drop)
    pub fn fixed(x: f32, y: f32, width: f32, height: f32, color: BlockColor) -> Self {
        Self {
            x,
            y,
            width,
            height,
            moving: false,
            direction: Direction::default(),
            speed: 0.0,
            color,
        }
    }

    /// Right edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Advance one tick of oscillation.
    ///
    /// Movement is applied first and the bounds are checked afterwards, so a
    /// block may poke past an edge for one tick before the reversed direction
    /// takes effect. `x` is never clamped.
    pub fn step(&mut self, playfield_width: f32) {
        if !self.moving {
            return;
        }
        self.x += self.speed * self.direction.sign();
        if self.x <= 0.0 || self.right() >= playfield_width {
            self.direction = self.direction.flipped();
        }
    }

    /// Shared horizontal span with the block underneath
    pub fn overlap_with(&self, below: &Block) -> Overlap {
        let x = self.x.max(below.x);
        let end = self.right().min(below.right());
        Overlap { x, width: end - x }
    }

    /// Same position and width as `below`: nothing would be trimmed
    pub fn is_aligned_with(&self, below: &Block) -> bool {
        self.overlap_with(below).width == self.width && self.x == below.x
    }
}
