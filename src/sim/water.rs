//! Animated water band at the bottom of the field

use glam::Vec2;

use super::fish::Fish;
use crate::canvas::{Canvas, colors};
use crate::tuning::Tuning;

/// Horizontal distance between wave samples
const WAVE_SAMPLE_STEP: f32 = 10.0;
/// Horizontal stretch of the sine wave
const WAVE_LENGTH: f32 = 50.0;
const WAVE_AMPLITUDE: f32 = 5.0;

/// Highlight ellipses: spacing, first position, offset below the water line
const HIGHLIGHT_SPACING: usize = 80;
const HIGHLIGHT_START: usize = 20;
const HIGHLIGHT_DEPTH: f32 = 20.0;
const HIGHLIGHT_RADII: Vec2 = Vec2::new(20.0, 5.0);

/// The water surface. Its wave points are recomputed every frame.
#[derive(Debug, Clone, PartialEq)]
pub struct WaterSurface {
    /// Y of the band's flat top line
    water_line: f32,
    /// Wave phase, wraps back to zero
    pub wave_offset: f32,
    wave_points: Vec<Vec2>,
    field_width: f32,
    field_height: f32,
}

impl WaterSurface {
    pub fn new(tuning: &Tuning) -> Self {
        let mut water = Self {
            water_line: tuning.water_line(),
            wave_offset: 0.0,
            wave_points: Vec::new(),
            field_width: tuning.field_width,
            field_height: tuning.field_height,
        };
        water.update_wave_points();
        water
    }

    /// Advance the wave phase by one frame
    pub fn update(&mut self, tuning: &Tuning) {
        self.wave_offset += tuning.wave_step;
        if self.wave_offset > tuning.wave_wrap {
            self.wave_offset = 0.0;
        }
        self.update_wave_points();
    }

    fn update_wave_points(&mut self) {
        let base = self.surface_y();
        let limit = self.field_width + WAVE_SAMPLE_STEP;
        let offset = self.wave_offset;

        self.wave_points.clear();
        self.wave_points.extend(
            (0..)
                .map(|i| i as f32 * WAVE_SAMPLE_STEP)
                .take_while(|x| *x <= limit)
                .map(|x| Vec2::new(x, base + (x / WAVE_LENGTH + offset).sin() * WAVE_AMPLITUDE)),
        );
    }

    pub fn wave_points(&self) -> &[Vec2] {
        &self.wave_points
    }

    /// The flat line used for contact, ignoring the ripple
    pub fn surface_y(&self) -> f32 {
        self.water_line
    }

    /// The fish's lower edge has reached the water line
    pub fn touches(&self, fish: &Fish) -> bool {
        fish.bounds().bottom() >= self.surface_y()
    }

    pub fn draw(&self, canvas: &mut impl Canvas) {
        let bottom = self.field_height;

        // One quad per wave segment keeps every polygon convex
        for pair in self.wave_points.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            canvas.fill_polygon(
                &[a, b, Vec2::new(b.x, bottom), Vec2::new(a.x, bottom)],
                colors::WATER_BLUE,
            );
        }

        let y = self.surface_y() + HIGHLIGHT_DEPTH;
        let width = self.field_width.max(0.0) as usize;
        for x in (HIGHLIGHT_START..width).step_by(HIGHLIGHT_SPACING) {
            canvas.fill_ellipse(
                Vec2::new(x as f32 + HIGHLIGHT_RADII.x, y),
                HIGHLIGHT_RADII,
                colors::WATER_HIGHLIGHT,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::DrawList;

    #[test]
    fn test_wave_points_cover_field() {
        let water = WaterSurface::new(&Tuning::default());
        let points = water.wave_points();
        // 0, 10, ..., 410
        assert_eq!(points.len(), 42);
        assert_eq!(points[0], Vec2::new(0.0, 500.0));
        assert_eq!(points.last().map(|p| p.x), Some(410.0));
        assert!(
            points
                .iter()
                .all(|p| (p.y - 500.0).abs() <= WAVE_AMPLITUDE + 1e-4)
        );
    }

    #[test]
    fn test_phase_advances_and_wraps() {
        let tuning = Tuning::default();
        let mut water = WaterSurface::new(&tuning);
        let before = water.wave_points()[1];
        water.update(&tuning);
        assert!((water.wave_offset - 0.1).abs() < 1e-6);
        assert_ne!(water.wave_points()[1], before);

        water.wave_offset = 9.95;
        water.update(&tuning);
        assert_eq!(water.wave_offset, 0.0);
    }

    #[test]
    fn test_water_line_follows_tuning() {
        let mut tuning = Tuning::default().with_field_size(400.0, 800.0);
        tuning.water_height = 150.0;
        let water = WaterSurface::new(&tuning);
        assert_eq!(water.surface_y(), 650.0);
        assert_eq!(water.wave_points()[0], Vec2::new(0.0, 650.0));

        let mut fish = Fish::new(&tuning);
        fish.y = 650.0 - fish.height;
        assert!(water.touches(&fish));
    }

    #[test]
    fn test_touches_at_water_line() {
        let tuning = Tuning::default();
        let water = WaterSurface::new(&tuning);
        let mut fish = Fish::new(&tuning);

        fish.y = 500.0 - fish.height - 0.5;
        assert!(!water.touches(&fish));
        fish.y = 500.0 - fish.height;
        assert!(water.touches(&fish));
    }

    #[test]
    fn test_draw_band_and_highlights() {
        let water = WaterSurface::new(&Tuning::default());
        let mut list = DrawList::new();
        water.draw(&mut list);
        // 41 segments, highlights at 20, 100, 180, 260, 340
        assert_eq!(list.len(), 41 + 5);
        assert_eq!(list.commands()[0].color(), colors::WATER_BLUE);
        assert_eq!(
            list.commands().last().map(|c| c.color()),
            Some(colors::WATER_HIGHLIGHT)
        );
    }
}
