//! Screen metrics collaborator.
//!
//! Elements never query the window directly; they read reference dimensions
//! from a [`Screen`] handed to them for the current frame.

mod metrics;

pub use metrics::ScreenMetrics;

/// Reference dimensions of the surface HUD elements are drawn on.
pub trait Screen {
    /// Width in pixels.
    fn width(&self) -> f32;

    /// Height in pixels.
    fn height(&self) -> f32;

    /// Aspect-corrected width in pixels.
    ///
    /// Used as the horizontal reference by scaled draws so that layouts target
    /// a pseudo-resolution whose height is the real height and whose width
    /// follows the display's aspect ratio.
    fn scaled_width(&self) -> f32;

    /// The vertical counterpart of [`scaled_width`](Screen::scaled_width).
    ///
    /// Vertical scaling is never aspect-corrected, so this is the plain height.
    fn scaled_height(&self) -> f32 {
        self.height()
    }
}
