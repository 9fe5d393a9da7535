use hud_engine::coords::{NormRect, Size};
use hud_engine::paint::Color;
use hud_engine::render::Renderer;
use hud_engine::screen::Screen;

/// Which width a draw pass normalizes horizontal terms against.
///
/// Chosen once by the entry call on the root element and kept for the whole
/// subtree. Vertical terms always use the screen height.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Basis {
    /// `Screen::width`.
    #[default]
    Screen,
    /// `Screen::scaled_width`.
    Scaled,
}

/// Drawing surface passed to [`Element`](crate::element::Element) draw calls.
///
/// Borrows the frame's [`Screen`] metrics and [`Renderer`] for the duration of
/// one frame callback.
pub struct Painter<'a> {
    screen: &'a dyn Screen,
    renderer: &'a mut dyn Renderer,
    painted: usize,
}

impl<'a> Painter<'a> {
    pub fn new(screen: &'a dyn Screen, renderer: &'a mut dyn Renderer) -> Self {
        Self { screen, renderer, painted: 0 }
    }

    #[inline]
    pub fn screen(&self) -> &dyn Screen {
        self.screen
    }

    /// Reference dimensions for `basis`, as `(width, height)` in pixels.
    #[inline]
    pub fn reference(&self, basis: Basis) -> Size {
        let width = match basis {
            Basis::Screen => self.screen.width(),
            Basis::Scaled => self.screen.scaled_width(),
        };
        Size::new(width, self.screen.height())
    }

    /// Forwards one filled rectangle to the renderer.
    #[inline]
    pub fn fill_rect(&mut self, rect: NormRect, color: Color) {
        self.renderer.draw_rect(rect, color);
        self.painted += 1;
    }

    /// Number of rectangles this painter has forwarded so far.
    #[inline]
    pub fn rects_painted(&self) -> usize {
        self.painted
    }
}
