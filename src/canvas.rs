//! 2D drawing surface abstraction
//!
//! Entities draw themselves through the [`Canvas`] trait using fill-only
//! primitives in play-field pixel coordinates (origin top-left, y down).
//! [`DrawList`] records those calls so the renderer can tessellate them
//! later, and so tests can inspect what was drawn.

use glam::Vec2;

/// RGBA color, components in 0..=1
pub type Color = [f32; 4];

/// Build an opaque color from 8-bit sRGB components
pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
    rgba(r, g, b, 1.0)
}

/// Build a color from 8-bit sRGB components and an alpha
pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Color {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a]
}

/// Colors for game elements
pub mod colors {
    use super::{Color, rgb, rgba};

    pub const SKY_BLUE: Color = rgb(0x87, 0xCE, 0xEB);
    pub const PIPE_GREEN: Color = rgb(0x00, 0x88, 0x00);
    pub const WATER_BLUE: Color = rgb(0x40, 0xA4, 0xDF);
    pub const WATER_HIGHLIGHT: Color = rgba(100, 200, 255, 0.3);
    pub const FISH_ORANGE: Color = rgb(0xFF, 0x8C, 0x00);
    pub const WHITE: Color = rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = rgb(0x00, 0x00, 0x00);
    pub const CLOUD_WHITE: Color = rgb(0xF0, 0xF0, 0xF0);
}

/// A surface that accepts filled shapes
pub trait Canvas {
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);

    /// Axis-aligned ellipse
    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: Color);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.fill_ellipse(center, Vec2::splat(radius), color);
    }

    /// Points must describe a convex polygon
    fn fill_polygon(&mut self, points: &[Vec2], color: Color);
}

/// One recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect {
        pos: Vec2,
        size: Vec2,
        color: Color,
    },
    Ellipse {
        center: Vec2,
        radii: Vec2,
        color: Color,
    },
    Polygon {
        points: Vec<Vec2>,
        color: Color,
    },
}

impl DrawCommand {
    pub fn color(&self) -> Color {
        match self {
            DrawCommand::Rect { color, .. }
            | DrawCommand::Ellipse { color, .. }
            | DrawCommand::Polygon { color, .. } => *color,
        }
    }
}

/// Ordered list of drawing calls for one frame (painter's order)
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Canvas for DrawList {
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.commands.push(DrawCommand::Rect {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
            color,
        });
    }

    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: Color) {
        self.commands.push(DrawCommand::Ellipse {
            center,
            radii,
            color,
        });
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        // Anything under three points has no area
        if points.len() < 3 {
            return;
        }
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            color,
        });
    }
}
