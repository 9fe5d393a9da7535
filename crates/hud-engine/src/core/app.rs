use anyhow::Result;
use winit::event::WindowEvent;

use crate::screen::ScreenMetrics;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Overlay contract driven by [`Runtime`](crate::window::Runtime).
///
/// Lifecycle for the single host window:
/// 1. `on_start` once, with the first usable screen metrics
/// 2. `on_frame` on every redraw while the window has a drawable area
///
/// An error from `on_frame` stops the loop and is returned from
/// `Runtime::run`.
pub trait App {
    fn on_start(&mut self, screen: &ScreenMetrics) {
        let _ = screen;
    }

    /// Sees every window event before the runtime does.
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> Result<AppControl>;
}
