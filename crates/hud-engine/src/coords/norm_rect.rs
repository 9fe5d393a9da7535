use super::{Size, Vec2};

/// Center-anchored rectangle in normalized screen space.
///
/// `x`/`y` locate the rectangle's center and `w`/`h` its extent, all as
/// fractions of the reference width (`x`, `w`) and height (`y`, `h`). Anything
/// visible lies in `[0, 1]`, but values are not clamped.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct NormRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl NormRect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn size(self) -> Size {
        Size::new(self.w, self.h)
    }

    /// Top-left corner in normalized space.
    #[inline]
    pub fn min(self) -> Vec2 {
        Vec2::new(self.x - self.w * 0.5, self.y - self.h * 0.5)
    }

    /// Bottom-right corner in normalized space.
    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.x + self.w * 0.5, self.y + self.h * 0.5)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.w.is_finite() && self.h.is_finite()
    }

    /// Maps this rectangle back to a top-left pixel origin and pixel size for a
    /// `width` x `height` reference.
    #[inline]
    pub fn to_pixels(self, width: f32, height: f32) -> (Vec2, Size) {
        let min = self.min();
        (
            Vec2::new(min.x * width, min.y * height),
            Size::new(self.w * width, self.h * height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_straddle_center() {
        let r = NormRect::new(0.5, 0.5, 0.25, 0.5);
        assert_eq!(r.min(), Vec2::new(0.375, 0.25));
        assert_eq!(r.max(), Vec2::new(0.625, 0.75));
    }

    #[test]
    fn to_pixels_recovers_top_left() {
        let r = NormRect::new(0.25, 0.5, 0.5, 0.5);
        let (origin, size) = r.to_pixels(1000.0, 800.0);
        assert_eq!(origin, Vec2::new(0.0, 200.0));
        assert_eq!(size, Size::new(500.0, 400.0));
    }

    #[test]
    fn non_finite_detected() {
        assert!(!NormRect::new(f32::NAN, 0.0, 0.1, 0.1).is_finite());
        assert!(NormRect::new(0.0, 0.0, -0.1, 0.1).is_finite());
    }
}
