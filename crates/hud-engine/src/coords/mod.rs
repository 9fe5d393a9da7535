//! Coordinate and geometry types shared by HUD elements and renderers.
//!
//! Two spaces are in play:
//! - Pixel space: what scripts author in. Origin top-left, +X right, +Y down.
//! - Normalized space: fractions of the reference width/height, `[0, 1]` for
//!   anything on screen. This is what a [`Renderer`](crate::render::Renderer)
//!   receives, with rectangles anchored at their center.

mod norm_rect;
mod size;
mod vec2;

pub use norm_rect::NormRect;
pub use size::Size;
pub use vec2::Vec2;
