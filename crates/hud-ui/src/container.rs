use std::fmt;

use hud_engine::coords::{Size, Vec2};
use hud_engine::paint::Color;
use hud_engine::screen::Screen;

use crate::element::{shared, Element, ElementRef, Shared};
use crate::painter::{Basis, Painter};
use crate::rectangle::Rectangle;

/// A rectangle that also groups an ordered list of child elements.
///
/// The container paints its own rectangle first (use a transparent color for
/// a purely logical group), then each item in insertion order. Item positions
/// are relative to the container's top-left corner, whatever its anchor mode.
///
/// Items are shared handles, so a script can keep a `Shared<Rectangle>` to a
/// child and mutate it between frames while it stays listed here.
///
/// There is no cycle check: a container must never end up as its own
/// descendant. Doing so recurses without bound on the next draw and leaks the
/// `Rc` cycle.
///
/// # Example
/// ```rust,ignore
/// let mut panel = Container::with_color((20.0, 20.0), (220.0, 40.0), Color::rgba(0, 0, 0, 160));
/// let fill = panel.add(Rectangle::with_color((10.0, 10.0), (200.0, 20.0), Color::rgb(60, 200, 90)));
///
/// // later, per frame:
/// fill.borrow_mut().set_size((health * 2.0, 20.0));
/// panel.draw(painter);
/// ```
pub struct Container {
    frame: Rectangle,
    items: Vec<ElementRef>,
}

impl Container {
    /// Transparent, top-left anchored, enabled, no items.
    pub fn new(position: impl Into<Vec2>, size: impl Into<Size>) -> Self {
        Self::from_frame(Rectangle::new(position, size))
    }

    pub fn with_color(position: impl Into<Vec2>, size: impl Into<Size>, color: Color) -> Self {
        Self::from_frame(Rectangle::with_color(position, size, color))
    }

    pub fn with_style(
        position: impl Into<Vec2>,
        size: impl Into<Size>,
        color: Color,
        centered: bool,
    ) -> Self {
        Self::from_frame(Rectangle::with_style(position, size, color, centered))
    }

    /// Screen-sized transparent group at the origin.
    pub fn fullscreen(screen: &dyn Screen) -> Self {
        Self::from_frame(Rectangle::fullscreen(screen))
    }

    /// Uses `frame` as the container's own rectangle.
    pub fn from_frame(frame: Rectangle) -> Self {
        Self { frame, items: Vec::new() }
    }

    /// Same container painted with `color`.
    pub fn tinted(mut self, color: Color) -> Self {
        self.frame = self.frame.tinted(color);
        self
    }

    /// Same container anchored at its center (`true`) or top-left corner.
    ///
    /// Items stay relative to the top-left corner either way.
    pub fn with_centered(mut self, centered: bool) -> Self {
        self.frame = self.frame.with_centered(centered);
        self
    }

    /// The container's own rectangle.
    #[inline]
    pub fn frame(&self) -> &Rectangle {
        &self.frame
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.frame.size()
    }

    #[inline]
    pub fn set_size(&mut self, size: impl Into<Size>) {
        self.frame.set_size(size);
    }

    // ── items ─────────────────────────────────────────────────────────────

    /// Appends an existing shared element.
    pub fn push(&mut self, item: ElementRef) {
        self.items.push(item);
    }

    /// Wraps `element` in a shared handle, appends it, and returns the typed
    /// handle for later mutation.
    pub fn add<E: Element>(&mut self, element: E) -> Shared<E> {
        let handle = shared(element);
        self.items.push(handle.clone());
        handle
    }

    /// # Panics
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, item: ElementRef) {
        self.items.insert(index, item);
    }

    /// # Panics
    /// Panics if `index >= len`.
    pub fn remove(&mut self, index: usize) -> ElementRef {
        self.items.remove(index)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in draw order.
    #[inline]
    pub fn items(&self) -> &[ElementRef] {
        &self.items
    }

    /// Offset handed to items when this container is drawn with `offset`:
    /// the container's top-left corner in pixels.
    pub fn child_offset(&self, offset: Vec2) -> Vec2 {
        let origin = offset + self.frame.position();
        if self.frame.centered() {
            origin - self.frame.size().half()
        } else {
            origin
        }
    }
}

impl Element for Container {
    fn enabled(&self) -> bool {
        self.frame.enabled()
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.frame.set_enabled(enabled);
    }

    fn color(&self) -> Color {
        self.frame.color()
    }

    fn set_color(&mut self, color: Color) {
        self.frame.set_color(color);
    }

    fn position(&self) -> Vec2 {
        self.frame.position()
    }

    fn set_position(&mut self, position: Vec2) {
        self.frame.set_position(position);
    }

    fn centered(&self) -> bool {
        self.frame.centered()
    }

    fn set_centered(&mut self, centered: bool) {
        self.frame.set_centered(centered);
    }

    fn paint(&self, painter: &mut Painter<'_>, offset: Vec2, basis: Basis) {
        if !self.frame.enabled() {
            return;
        }

        self.frame.paint(painter, offset, basis);

        let child_offset = self.child_offset(offset);
        for (index, item) in self.items.iter().enumerate() {
            match item.try_borrow() {
                Ok(item) => item.paint(painter, child_offset, basis),
                // A script is holding this item mutably across the draw call.
                Err(_) => log::warn!("container item {index} is mutably borrowed; skipped"),
            }
        }
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("frame", &self.frame)
            .field("items", &self.items.len())
            .finish()
    }
}
