use super::Screen;

/// Plain-value [`Screen`] snapshot.
///
/// `aspect_ratio` is the display aspect reported by the host. It defaults to
/// `width / height`, which makes the scaled width equal to the width. Hosts
/// that render at an internal resolution different from the display (or with
/// non-square pixels) override it so that scaled draws keep shapes square.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScreenMetrics {
    pub width: f32,
    pub height: f32,
    pub aspect_ratio: f32,
}

impl ScreenMetrics {
    #[inline]
    pub fn new(width: f32, height: f32) -> Self {
        let aspect_ratio = if height > 0.0 { width / height } else { 1.0 };
        Self { width, height, aspect_ratio }
    }

    /// Overrides the display aspect ratio used for the scaled width.
    #[inline]
    pub fn with_aspect_ratio(mut self, aspect_ratio: f32) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0
            && self.height > 0.0
            && self.aspect_ratio > 0.0
            && self.width.is_finite()
            && self.height.is_finite()
            && self.aspect_ratio.is_finite()
    }
}

impl Default for ScreenMetrics {
    /// 1920x1080, 16:9.
    fn default() -> Self {
        Self::new(1920.0, 1080.0)
    }
}

impl Screen for ScreenMetrics {
    #[inline]
    fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    fn height(&self) -> f32 {
        self.height
    }

    #[inline]
    fn scaled_width(&self) -> f32 {
        self.height * self.aspect_ratio
    }
}
