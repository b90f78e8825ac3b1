//! Background clouds (decoration only)

use glam::Vec2;

use super::random::{GameRng, random};
use crate::canvas::{Canvas, colors};
use crate::tuning::Tuning;

/// A drifting cloud. Never interacts with anything.
#[derive(Debug, Clone, PartialEq)]
pub struct Cloud {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Pixels per frame to the left
    pub speed: f32,
}

impl Cloud {
    /// A random cloud just beyond the right edge
    pub fn new(rng: &mut GameRng, tuning: &Tuning) -> Self {
        Self {
            x: tuning.field_width + random(rng, 10.0, 100.0),
            y: random(rng, 50.0, 200.0),
            width: random(rng, 60.0, 120.0),
            height: random(rng, 30.0, 50.0),
            speed: random(rng, 0.5, 1.5),
        }
    }

    pub fn update(&mut self) {
        self.x -= self.speed;
    }

    pub fn is_off_screen(&self) -> bool {
        self.x + self.width < 0.0
    }

    /// Five overlapping puffs
    pub fn draw(&self, canvas: &mut impl Canvas) {
        let r = self.height / 2.0;
        let puffs = [
            Vec2::new(self.x, self.y),
            Vec2::new(self.x + r, self.y - r / 2.0),
            Vec2::new(self.x + r * 2.0, self.y),
            Vec2::new(self.x + r / 2.0, self.y + r / 3.0),
            Vec2::new(self.x + r * 1.5, self.y + r / 3.0),
        ];
        for center in puffs {
            canvas.fill_circle(center, r, colors::CLOUD_WHITE);
        }
    }
}
