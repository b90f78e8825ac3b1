//! The player's fish

use glam::Vec2;

use super::collision::Rect;
use crate::canvas::{Canvas, colors};
use crate::tuning::Tuning;

/// Tail length behind the body
const TAIL_LENGTH: f32 = 15.0;
/// Fin tip distance from the back
const FIN_HEIGHT: f32 = 8.0;
const EYE_INSET: f32 = 10.0;
const EYE_RADIUS: f32 = 5.0;
const PUPIL_RADIUS: f32 = 2.0;

/// The player entity. Only `y` and `velocity` change during play.
#[derive(Debug, Clone, PartialEq)]
pub struct Fish {
    pub x: f32,
    pub y: f32,
    /// Vertical velocity in pixels per frame (positive = down)
    pub velocity: f32,
    pub width: f32,
    pub height: f32,
    /// Fin pose, toggled for the swim animation
    pub flip: bool,
    flip_timer: u32,
}

impl Fish {
    /// A fresh fish at the vertical center of the field, at rest
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            x: tuning.fish_x,
            y: tuning.field_height / 2.0,
            velocity: 0.0,
            width: tuning.fish_width,
            height: tuning.fish_height,
            flip: false,
            flip_timer: 0,
        }
    }

    /// Integrate gravity for one frame and advance the fin animation
    pub fn update(&mut self, tuning: &Tuning) {
        self.velocity += tuning.gravity;
        self.y += self.velocity;

        // Only the top of the field is a wall
        if self.y <= 0.0 {
            self.y = 0.0;
            self.velocity = 0.0;
        }

        self.flip_timer += 1;
        if self.flip_timer > tuning.flip_period {
            self.flip = !self.flip;
            self.flip_timer = 0;
        }
    }

    /// Upward kick
    pub fn flap(&mut self, tuning: &Tuning) {
        self.velocity = tuning.flap_strength;
        self.flip = !self.flip;
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn draw(&self, canvas: &mut impl Canvas) {
        let (x, y, w, h) = (self.x, self.y, self.width, self.height);

        // Body
        canvas.fill_ellipse(
            Vec2::new(x + w / 2.0, y + h / 2.0),
            Vec2::new(w / 2.0, h / 2.0),
            colors::FISH_ORANGE,
        );

        // Tail
        canvas.fill_polygon(
            &[
                Vec2::new(x, y + h / 2.0),
                Vec2::new(x - TAIL_LENGTH, y + h / 4.0),
                Vec2::new(x - TAIL_LENGTH, y + 3.0 * h / 4.0),
            ],
            colors::FISH_ORANGE,
        );

        // Eye
        let eye = Vec2::new(x + w - EYE_INSET, y + h / 3.0);
        canvas.fill_circle(eye, EYE_RADIUS, colors::WHITE);
        canvas.fill_circle(eye, PUPIL_RADIUS, colors::BLACK);

        // Fin points up or down depending on the animation pose
        let fin = if self.flip { FIN_HEIGHT } else { -FIN_HEIGHT };
        canvas.fill_polygon(
            &[
                Vec2::new(x + w / 3.0, y),
                Vec2::new(x + w / 2.0, y - fin),
                Vec2::new(x + 2.0 * w / 3.0, y),
            ],
            colors::FISH_ORANGE,
        );
    }
}
