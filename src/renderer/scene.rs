//! Per-frame draw list
//!
//! Converts simulation state into screen-space triangles plus HUD text. World
//! y is shifted by the camera offset; a backend only has to upload the
//! vertices and draw the two text lines.

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, block_color, colors};
use crate::persistence::ScoreStore;
use crate::sim::{Block, GameState};

/// Border width around every block
pub const BLOCK_OUTLINE: f32 = 3.0;
/// Segments used to tessellate sparkle particles
pub const SPARKLE_SEGMENTS: u32 = 12;
/// Score panel placement (top-left corner and size)
pub const HUD_PANEL_MIN: Vec2 = Vec2::new(8.0, 8.0);
pub const HUD_PANEL_SIZE: Vec2 = Vec2::new(220.0, 30.0);

pub const GAME_OVER_TEXT: &str = "Game Over! Click to Restart";

/// Text overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hud {
    /// "Score: S | Best: B"
    pub score_line: String,
    /// Centered prompt, present only after a game over
    pub game_over_line: Option<String>,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone)]
pub struct Scene {
    /// Background, blocks, falling block, sparkles, then HUD panel, in draw order
    pub vertices: Vec<Vertex>,
    pub hud: Hud,
    /// Vertical camera offset the world was drawn with
    pub offset_y: f32,
}

impl Scene {
    pub fn build<S: ScoreStore>(state: &GameState<S>) -> Self {
        let tuning = state.tuning();
        let offset_y = state.offset_y();
        let mut vertices = shapes::rect(
            Vec2::ZERO,
            Vec2::new(tuning.playfield_width, tuning.playfield_height),
            colors::BACKGROUND,
        );

        for block in state.blocks() {
            push_block(&mut vertices, block, offset_y);
        }

        if let Some(block) = state.falling_block() {
            push_block(&mut vertices, block, offset_y);
        }

        for burst in state.bursts() {
            for p in burst.particles() {
                // Whole-pixel radius; sub-pixel sparkles are not drawn
                let radius = p.radius.trunc();
                if radius < 1.0 {
                    continue;
                }
                let center = Vec2::new(p.pos.x.trunc(), (p.pos.y - offset_y).trunc());
                vertices.extend(shapes::circle(
                    center,
                    radius,
                    colors::SPARKLE,
                    SPARKLE_SEGMENTS,
                ));
            }
        }

        vertices.extend(shapes::rect(HUD_PANEL_MIN, HUD_PANEL_SIZE, colors::HUD_PANEL));
        vertices.extend(shapes::rect_outline(
            HUD_PANEL_MIN,
            HUD_PANEL_SIZE,
            2.0,
            colors::OUTLINE,
        ));

        Self {
            vertices,
            hud: Hud::for_state(state),
            offset_y,
        }
    }
}

impl Hud {
    pub fn for_state<S: ScoreStore>(state: &GameState<S>) -> Self {
        Self {
            score_line: format!("Score: {} | Best: {}", state.score(), state.best()),
            game_over_line: (!state.is_running()).then(|| GAME_OVER_TEXT.to_string()),
        }
    }
}

fn push_block(vertices: &mut Vec<Vertex>, block: &Block, offset_y: f32) {
    let min = Vec2::new(block.x, block.y - offset_y);
    let size = Vec2::new(block.width, block.height);
    vertices.extend(shapes::rect(min, size, block_color(block.color)));
    vertices.extend(shapes::rect_outline(min, size, BLOCK_OUTLINE, colors::OUTLINE));
}

/// First background row to show so the backdrop scrolls with the tower.
///
/// Starts at the bottom of a tall background image and moves up as the
/// camera offset goes negative, clamped to the image.
pub fn background_scroll(bg_height: f32, view_height: f32, offset_y: f32) -> f32 {
    let max = bg_height - view_height;
    let row = (bg_height - view_height + offset_y).max(0.0);
    if row > max { max } else { row }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscores::PersonalBest;
    use crate::persistence::MemoryStore;
    use crate::sim::{GamePhase, TickInput, tick};
    use crate::tuning::Tuning;

    // background + block fill/outline + hud panel/outline
    const BACKGROUND_VERTS: usize = 6;
    const BLOCK_VERTS: usize = 6 + 24;
    const HUD_VERTS: usize = 6 + 24;

    fn new_state() -> GameState<MemoryStore> {
        GameState::new(
            Tuning::default(),
            PersonalBest::load(MemoryStore::with_best(4)),
            1,
        )
    }

    #[test]
    fn test_initial_scene() {
        let state = new_state();
        let scene = Scene::build(&state);
        assert_eq!(scene.vertices.len(), BACKGROUND_VERTS + 2 * BLOCK_VERTS + HUD_VERTS);
        assert_eq!(scene.hud.score_line, "Score: 0 | Best: 4");
        assert_eq!(scene.hud.game_over_line, None);
        // Base block fill starts right after the background
        assert_eq!(scene.vertices[BACKGROUND_VERTS].position, [134.0, 565.0]);
    }

    #[test]
    fn test_game_over_hides_falling_block() {
        let mut state = new_state();
        // Let the block slide clear of the base, then drop
        state.current.x = 300.0;
        state.drop_block();
        assert_eq!(state.phase(), GamePhase::GameOver);

        let scene = Scene::build(&state);
        assert_eq!(scene.vertices.len(), BACKGROUND_VERTS + BLOCK_VERTS + HUD_VERTS);
        assert_eq!(scene.hud.game_over_line.as_deref(), Some(GAME_OVER_TEXT));
    }

    #[test]
    fn test_blocks_shift_by_offset() {
        let mut state = new_state();
        state.offset_y = -70.0;
        let scene = Scene::build(&state);
        assert_eq!(scene.offset_y, -70.0);
        assert_eq!(scene.vertices[BACKGROUND_VERTS].position, [134.0, 635.0]);
    }

    #[test]
    fn test_sparkles_drawn() {
        let mut state = new_state();
        state.current.x = 134.0;
        state.drop_block();
        assert_eq!(state.bursts().len(), 1);
        tick(&mut state, &TickInput::default());

        let scene = Scene::build(&state);
        let sparkle_verts = scene
            .vertices
            .iter()
            .filter(|v| v.color == colors::SPARKLE)
            .count();
        let drawn = state.bursts()[0]
            .particles()
            .iter()
            .filter(|p| p.radius >= 1.0)
            .count();
        assert_eq!(sparkle_verts, drawn * SPARKLE_SEGMENTS as usize * 3);
    }

    #[test]
    fn test_background_scroll_clamps() {
        // 1200px image in a 600px view starts at the bottom
        assert_eq!(background_scroll(1200.0, 600.0, 0.0), 600.0);
        assert_eq!(background_scroll(1200.0, 600.0, -35.0), 565.0);
        // Runs out of image at the top
        assert_eq!(background_scroll(1200.0, 600.0, -900.0), 0.0);
        // Positive offsets never scroll below the bottom
        assert_eq!(background_scroll(1200.0, 600.0, 50.0), 600.0);
    }
}
