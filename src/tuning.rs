//! Data-driven game balance
//!
//! Every constant the simulation depends on lives here so a settings file can
//! reshape the playfield without touching code.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Rejected tuning values
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TuningError {
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("empty range for {field}: {min}..={max}")]
    EmptyRange {
        field: &'static str,
        min: i32,
        max: i32,
    },
}

/// Sparkle burst parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SparkleTuning {
    /// Particles per burst
    pub count: usize,
    /// Initial radius range (inclusive, whole pixels)
    pub radius_min: i32,
    pub radius_max: i32,
    /// Horizontal speed; each particle drifts left or right at this rate
    pub drift: f32,
    /// Vertical velocity range (inclusive, negative is upward)
    pub rise_min: i32,
    pub rise_max: i32,
    /// Radius lost per tick
    pub decay: f32,
}

impl Default for SparkleTuning {
    fn default() -> Self {
        Self {
            count: SPARKLE_COUNT,
            radius_min: 1,
            radius_max: 3,
            drift: 1.0,
            rise_min: -3,
            rise_max: -1,
            decay: SPARKLE_DECAY,
        }
    }
}

/// Gameplay geometry and timing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub playfield_width: f32,
    pub playfield_height: f32,
    pub block_height: f32,
    pub block_speed: f32,
    pub scroll_threshold: f32,
    pub sparkle: SparkleTuning,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,
            block_height: BLOCK_HEIGHT,
            block_speed: BLOCK_SPEED,
            scroll_threshold: SCROLL_THRESHOLD,
            sparkle: SparkleTuning::default(),
        }
    }
}

impl Tuning {
    /// Width of the base block and of the first falling block (a third of the playfield)
    pub fn starting_width(&self) -> f32 {
        (self.playfield_width / 3.0).floor()
    }

    /// Left edge of the base block, centered the way the playfield grid rounds it
    pub fn base_x(&self) -> f32 {
        (self.playfield_width / 2.0).floor() - (self.playfield_width / 6.0).floor()
    }

    /// Check that the values describe a playable field
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("playfield_width", self.playfield_width),
            ("playfield_height", self.playfield_height),
            ("block_height", self.block_height),
            ("block_speed", self.block_speed),
            ("sparkle.decay", self.sparkle.decay),
        ];
        for (field, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(TuningError::NotPositive { field, value });
            }
        }
        if self.starting_width() <= 0.0 {
            return Err(TuningError::NotPositive {
                field: "playfield_width / 3",
                value: self.starting_width(),
            });
        }
        if self.sparkle.radius_min > self.sparkle.radius_max || self.sparkle.radius_max <= 0 {
            return Err(TuningError::EmptyRange {
                field: "sparkle.radius",
                min: self.sparkle.radius_min,
                max: self.sparkle.radius_max,
            });
        }
        if self.sparkle.rise_min > self.sparkle.rise_max {
            return Err(TuningError::EmptyRange {
                field: "sparkle.rise",
                min: self.sparkle.rise_min,
                max: self.sparkle.rise_max,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry() {
        let tuning = Tuning::default();
        assert_eq!(tuning.starting_width(), 133.0);
        assert_eq!(tuning.base_x(), 134.0);
        assert!(tuning.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_speed() {
        let tuning = Tuning {
            block_speed: 0.0,
            ..Default::default()
        };
        assert_eq!(
            tuning.validate(),
            Err(TuningError::NotPositive {
                field: "block_speed",
                value: 0.0
            })
        );
    }

    #[test]
    fn test_rejects_inverted_radius_range() {
        let mut tuning = Tuning::default();
        tuning.sparkle.radius_min = 4;
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::EmptyRange { field: "sparkle.radius", .. })
        ));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning: Tuning = serde_json::from_str(r#"{"block_speed": 6.0}"#).unwrap();
        assert_eq!(tuning.block_speed, 6.0);
        assert_eq!(tuning.playfield_width, PLAYFIELD_WIDTH);
        assert_eq!(tuning.sparkle.count, SPARKLE_COUNT);
    }
}
