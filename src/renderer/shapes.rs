//! Shape generation for the track scene
//!
//! Vertices are emitted in track coordinates (origin top-left, y down);
//! `RenderState` maps them to clip space.

use glam::Vec2;

use super::vertex::{Palette, Vertex};
use crate::consts::{TRACK_HEIGHT, TRACK_WIDTH};
use crate::sim::Aabb;
use crate::view::Frame;

/// Generate vertices for a filled rectangle (two triangles)
pub fn rect(aabb: &Aabb, color: [f32; 4]) -> Vec<Vertex> {
    let Aabb { min, max } = *aabb;
    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// The full track surface
pub fn track_bounds() -> Aabb {
    Aabb::new(Vec2::ZERO, Vec2::new(TRACK_WIDTH, TRACK_HEIGHT))
}

/// Build the vertex list for one frame: track, obstacle, player, and the
/// dimming tint when the run is over
pub fn frame_vertices(frame: &Frame, palette: &Palette) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(24);
    vertices.extend(rect(&track_bounds(), palette.track));
    vertices.extend(rect(&frame.obstacle, palette.obstacle));
    vertices.extend(rect(&frame.player, palette.player));
    if frame.game_over {
        vertices.extend(rect(&track_bounds(), palette.game_over_tint));
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameState;

    #[test]
    fn test_rect_covers_corners() {
        let aabb = Aabb::new(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0));
        let vertices = rect(&aabb, [1.0; 4]);
        assert_eq!(vertices.len(), 6);
        for corner in [[1.0, 2.0], [3.0, 2.0], [1.0, 4.0], [3.0, 4.0]] {
            assert!(vertices.iter().any(|v| v.position == corner));
        }
    }

    #[test]
    fn test_frame_vertices_draw_order() {
        let state = GameState::new(4);
        let frame = Frame::from_state(&state);
        let vertices = frame_vertices(&frame, &Palette::STANDARD);
        assert_eq!(vertices.len(), 18);
        assert_eq!(vertices[0].color, Palette::STANDARD.track);
        assert_eq!(vertices[6].color, Palette::STANDARD.obstacle);
        // Player drawn last so it stays on top
        assert_eq!(vertices[12].color, Palette::STANDARD.player);
        assert_eq!(vertices[12].position, [175.0, 530.0]);
    }

    #[test]
    fn test_game_over_adds_tint() {
        let state = GameState::new(4);
        let mut frame = Frame::from_state(&state);
        frame.game_over = true;
        let vertices = frame_vertices(&frame, &Palette::HIGH_CONTRAST);
        assert_eq!(vertices.len(), 24);
        assert_eq!(vertices[18].color, Palette::HIGH_CONTRAST.game_over_tint);
    }
}
