//! Pipe obstacles

use super::fish::Fish;
use super::random::{GameRng, random};
use crate::canvas::{Canvas, colors};
use crate::tuning::Tuning;

/// Cap overhang on each side of the pipe body
const CAP_OVERHANG: f32 = 5.0;
const CAP_HEIGHT: f32 = 20.0;

/// An upper and lower pipe pair sharing one gap
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    /// Left edge
    pub x: f32,
    /// Bottom of the upper pipe, fixed for the pipe's lifetime
    gap_top: f32,
    /// Distance from the upper pipe to the lower pipe
    gap: f32,
    pub width: f32,
    /// Already counted toward the score
    pub passed: bool,
}

impl Pipe {
    /// Spawn at the right edge with a random gap position
    pub fn new(rng: &mut GameRng, tuning: &Tuning) -> Self {
        let gap_top = random(rng, tuning.gap_top_min, tuning.gap_top_max);
        Self::with_gap_top(tuning.field_width, gap_top, tuning)
    }

    pub fn with_gap_top(x: f32, gap_top: f32, tuning: &Tuning) -> Self {
        Self {
            x,
            gap_top,
            gap: tuning.pipe_gap,
            width: tuning.pipe_width,
            passed: false,
        }
    }

    pub fn gap_top(&self) -> f32 {
        self.gap_top
    }

    /// Top of the lower pipe
    pub fn gap_bottom(&self) -> f32 {
        self.gap_top + self.gap
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn update(&mut self, tuning: &Tuning) {
        self.x -= tuning.pipe_speed;
    }

    /// Fish overlaps the pipe column and is outside the gap
    pub fn collides(&self, fish: &Fish) -> bool {
        let bounds = fish.bounds();
        bounds.overlaps_x(self.x, self.right())
            && (bounds.y < self.gap_top || bounds.bottom() > self.gap_bottom())
    }

    /// Marks the pipe passed the first time its right edge is behind `fish_x`.
    /// Returns true only on that first time.
    pub fn try_pass(&mut self, fish_x: f32) -> bool {
        if !self.passed && self.right() < fish_x {
            self.passed = true;
            return true;
        }
        false
    }

    /// Fully scrolled past the left edge
    pub fn is_off_screen(&self) -> bool {
        self.right() < 0.0
    }

    pub fn draw(&self, canvas: &mut impl Canvas, tuning: &Tuning) {
        let color = colors::PIPE_GREEN;
        let cap_x = self.x - CAP_OVERHANG;
        let cap_width = self.width + 2.0 * CAP_OVERHANG;

        // Upper pipe and its cap
        canvas.fill_rect(self.x, 0.0, self.width, self.gap_top, color);
        canvas.fill_rect(cap_x, self.gap_top - CAP_HEIGHT, cap_width, CAP_HEIGHT, color);

        // Lower pipe and its cap
        let bottom = self.gap_bottom();
        canvas.fill_rect(self.x, bottom, self.width, tuning.field_height - bottom, color);
        canvas.fill_rect(cap_x, bottom, cap_width, CAP_HEIGHT, color);
    }
}
