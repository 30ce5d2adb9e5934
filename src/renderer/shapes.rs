//! Shape generation for 2D primitives
//!
//! Everything is emitted as triangle lists in screen space.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(min: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let max = min + size;
    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Generate vertices for a rectangle border drawn inside its bounds
pub fn rect_outline(min: Vec2, size: Vec2, thickness: f32, color: [f32; 4]) -> Vec<Vertex> {
    let t = thickness.min(size.x / 2.0).min(size.y / 2.0).max(0.0);
    let mut vertices = Vec::with_capacity(24);
    // Top, bottom, left, right bands
    vertices.extend(rect(min, Vec2::new(size.x, t), color));
    vertices.extend(rect(
        Vec2::new(min.x, min.y + size.y - t),
        Vec2::new(size.x, t),
        color,
    ));
    vertices.extend(rect(
        Vec2::new(min.x, min.y + t),
        Vec2::new(t, size.y - 2.0 * t),
        color,
    ));
    vertices.extend(rect(
        Vec2::new(min.x + size.x - t, min.y + t),
        Vec2::new(t, size.y - 2.0 * t),
        color,
    ));
    vertices
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}
