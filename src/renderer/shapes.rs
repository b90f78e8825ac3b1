//! Shape generation for 2D primitives
//!
//! Everything becomes a triangle list in play-field pixel coordinates.

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;
use crate::canvas::{Color, DrawCommand, DrawList};

const MIN_ELLIPSE_SEGMENTS: u32 = 12;
const MAX_ELLIPSE_SEGMENTS: u32 = 48;

/// Segment count that keeps ellipse edges smooth at their size
fn ellipse_segments(radii: Vec2) -> u32 {
    ((radii.max_element() * 0.75) as u32).clamp(MIN_ELLIPSE_SEGMENTS, MAX_ELLIPSE_SEGMENTS)
}

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(pos: Vec2, size: Vec2, color: Color) -> Vec<Vertex> {
    let (x0, y0) = (pos.x, pos.y);
    let (x1, y1) = (pos.x + size.x, pos.y + size.y);

    vec![
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Generate vertices for a filled ellipse
pub fn ellipse(center: Vec2, radii: Vec2, color: Color, segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radii.x * theta1.cos(),
            center.y + radii.y * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radii.x * theta2.cos(),
            center.y + radii.y * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a convex polygon (triangle fan from the first point)
pub fn convex_polygon(points: &[Vec2], color: Color) -> Vec<Vertex> {
    if points.len() < 3 {
        return Vec::new();
    }

    let anchor = points[0];
    let mut vertices = Vec::with_capacity((points.len() - 2) * 3);
    for pair in points[1..].windows(2) {
        vertices.push(Vertex::new(anchor.x, anchor.y, color));
        vertices.push(Vertex::new(pair[0].x, pair[0].y, color));
        vertices.push(Vertex::new(pair[1].x, pair[1].y, color));
    }

    vertices
}

/// Tessellate a whole frame, preserving painter's order
pub fn tessellate(list: &DrawList) -> Vec<Vertex> {
    let mut vertices = Vec::new();

    for command in list.commands() {
        match command {
            DrawCommand::Rect { pos, size, color } => {
                vertices.extend(rect(*pos, *size, *color));
            }
            DrawCommand::Ellipse {
                center,
                radii,
                color,
            } => {
                vertices.extend(ellipse(*center, *radii, *color, ellipse_segments(*radii)));
            }
            DrawCommand::Polygon { points, color } => {
                vertices.extend(convex_polygon(points, *color));
            }
        }
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{Canvas, colors};

    #[test]
    fn test_rect_corners() {
        let v = rect(Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0), colors::BLACK);
        assert_eq!(v.len(), 6);
        assert_eq!(v[0].position, [10.0, 20.0]);
        assert_eq!(v[5].position, [40.0, 60.0]);
    }

    #[test]
    fn test_ellipse_stays_within_radii() {
        let center = Vec2::new(100.0, 50.0);
        let radii = Vec2::new(20.0, 5.0);
        let v = ellipse(center, radii, colors::WHITE, 16);
        assert_eq!(v.len(), 48);
        for vertex in &v {
            let dx = vertex.position[0] - center.x;
            let dy = vertex.position[1] - center.y;
            assert!(dx.abs() <= radii.x + 1e-3);
            assert!(dy.abs() <= radii.y + 1e-3);
        }
    }

    #[test]
    fn test_segment_count_clamped() {
        assert_eq!(ellipse_segments(Vec2::splat(2.0)), MIN_ELLIPSE_SEGMENTS);
        assert_eq!(ellipse_segments(Vec2::splat(1000.0)), MAX_ELLIPSE_SEGMENTS);
    }

    #[test]
    fn test_polygon_fan() {
        let quad = [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ];
        assert_eq!(convex_polygon(&quad, colors::WHITE).len(), 6);
        assert!(convex_polygon(&quad[..2], colors::WHITE).is_empty());
    }

    #[test]
    fn test_tessellate_keeps_order() {
        let mut list = DrawList::new();
        list.fill_rect(0.0, 0.0, 400.0, 600.0, colors::SKY_BLUE);
        list.fill_circle(Vec2::new(50.0, 50.0), 2.0, colors::BLACK);

        let v = tessellate(&list);
        assert_eq!(v.len(), 6 + MIN_ELLIPSE_SEGMENTS as usize * 3);
        assert_eq!(v[0].color, colors::SKY_BLUE);
        assert_eq!(v.last().map(|v| v.color), Some(colors::BLACK));
    }
}
