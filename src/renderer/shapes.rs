//! Shape tessellation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Vertex, colors};
use crate::sim::{Rect, RenderView};

/// Two triangles covering an axis-aligned rectangle
pub fn rect(r: &Rect, color: [f32; 4]) -> [Vertex; 6] {
    let (left, top, right, bottom) = (r.left(), r.top(), r.right(), r.bottom());
    [
        Vertex::new(left, top, color),
        Vertex::new(right, top, color),
        Vertex::new(left, bottom, color),
        Vertex::new(right, top, color),
        Vertex::new(right, bottom, color),
        Vertex::new(left, bottom, color),
    ]
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

/// Segments used for coin discs
const COIN_SEGMENTS: u32 = 24;

/// Build the frame's vertex list from the simulation's read-only view:
/// platforms, then uncollected coins, then the player on top
pub fn scene(view: &RenderView) -> Vec<Vertex> {
    let mut vertices = Vec::new();

    for platform in view.platforms {
        vertices.extend_from_slice(&rect(platform, colors::PLATFORM));
    }

    for coin in view.coins {
        if !coin.collected {
            vertices.extend(circle(
                coin.rect.center(),
                coin.rect.w / 2.0,
                colors::COIN,
                COIN_SEGMENTS,
            ));
        }
    }

    vertices.extend_from_slice(&rect(&view.player, colors::PLAYER));

    vertices
}
