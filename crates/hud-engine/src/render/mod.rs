//! Rendering subsystem.
//!
//! [`Renderer`] is the seam HUD elements paint through. The GPU side
//! (`shapes::rect::RectRenderer`) consumes a recorded
//! [`DrawList`](crate::scene::DrawList) and issues wgpu commands.
//!
//! Convention:
//! - rectangles arrive normalized and center-anchored
//! - the vertex shader maps normalized space straight to NDC, so no viewport
//!   uniform is needed

mod ctx;
pub mod shapes;

pub use ctx::{RenderCtx, RenderTarget};

use crate::coords::NormRect;
use crate::paint::Color;

/// Paints filled rectangles on the current frame.
///
/// `rect` is center-anchored and normalized to the reference dimensions the
/// caller used. Implementations receive degenerate geometry (zero or negative
/// extents, off-screen centers) unmodified and decide themselves whether to
/// clip or skip it.
pub trait Renderer {
    fn draw_rect(&mut self, rect: NormRect, color: Color);
}
