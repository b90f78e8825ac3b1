//! Axis-aligned bounding boxes
//!
//! All overlap tests are strict: rectangles that only share an edge do not
//! collide.

/// Rectangle in play-field pixels (origin top-left, y down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Horizontal extents overlap
    #[inline]
    pub fn overlaps_x(&self, left: f32, right: f32) -> bool {
        self.right() > left && self.x < right
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.bottom(), 60.0);
    }

    #[test]
    fn test_overlaps_x() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps_x(5.0, 15.0));
        assert!(a.overlaps_x(-5.0, 20.0));
        assert!(!a.overlaps_x(20.0, 30.0));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps_x(10.0, 20.0));
        assert!(!a.overlaps_x(-5.0, 0.0));
        assert!(a.overlaps_x(-5.0, 0.5));
    }
}
