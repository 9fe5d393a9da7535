use std::cell::RefCell;
use std::rc::Rc;

use hud_engine::coords::Vec2;
use hud_engine::paint::Color;

use crate::painter::{Basis, Painter};

// ── shared handles ────────────────────────────────────────────────────────

/// Shared, mutable handle to an element.
///
/// Scripts keep one of these to mutate an element between frames while the
/// same element is listed in a [`Container`](crate::container::Container).
pub type Shared<T> = Rc<RefCell<T>>;

/// Type-erased shared element, the item type of containers.
///
/// Any `Shared<T>` with `T: Element` coerces to it:
///
/// ```rust,ignore
/// let bar = shared(Rectangle::new((10.0, 10.0), (100.0, 8.0)));
/// panel.push(bar.clone());           // Shared<Rectangle> → ElementRef
/// bar.borrow_mut().set_size(...);    // still reachable from the panel
/// ```
pub type ElementRef = Shared<dyn Element>;

/// Wraps `value` in a [`Shared`] handle.
#[inline]
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

// ── Element trait ─────────────────────────────────────────────────────────

/// Something that can be drawn as part of a HUD.
///
/// Implementors provide the property accessors and [`paint`](Element::paint);
/// the four public draw entry points are derived from it.
///
/// Offsets are in pixels and are added to [`position`](Element::position)
/// before normalization. Containers use them to place children relative to
/// their own top-left corner.
pub trait Element: 'static {
    fn enabled(&self) -> bool;
    fn set_enabled(&mut self, enabled: bool);

    fn color(&self) -> Color;
    fn set_color(&mut self, color: Color);

    /// Pixel position: the center if [`centered`](Element::centered), the
    /// top-left corner otherwise.
    fn position(&self) -> Vec2;
    fn set_position(&mut self, position: Vec2);

    fn centered(&self) -> bool;
    fn set_centered(&mut self, centered: bool);

    /// Paints this element shifted by `offset`, normalizing horizontal terms
    /// against the width `basis` selects.
    ///
    /// Disabled elements must not paint anything.
    fn paint(&self, painter: &mut Painter<'_>, offset: Vec2, basis: Basis);

    /// Draws against the screen width with no offset.
    #[inline]
    fn draw(&self, painter: &mut Painter<'_>) {
        self.paint(painter, Vec2::zero(), Basis::Screen);
    }

    /// Draws against the screen width, shifted by `offset` pixels.
    #[inline]
    fn draw_offset(&self, painter: &mut Painter<'_>, offset: Vec2) {
        self.paint(painter, offset, Basis::Screen);
    }

    /// Draws against the scaled width with no offset.
    #[inline]
    fn scaled_draw(&self, painter: &mut Painter<'_>) {
        self.paint(painter, Vec2::zero(), Basis::Scaled);
    }

    /// Draws against the scaled width, shifted by `offset` pixels.
    #[inline]
    fn scaled_draw_offset(&self, painter: &mut Painter<'_>, offset: Vec2) {
        self.paint(painter, offset, Basis::Scaled);
    }
}
