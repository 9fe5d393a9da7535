use crate::coords::NormRect;
use crate::paint::Color;
use crate::render::Renderer;

/// One recorded rectangle paint call.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: NormRect,
    pub color: Color,
}

impl RectCmd {
    #[inline]
    pub const fn new(rect: NormRect, color: Color) -> Self {
        Self { rect, color }
    }
}

/// Recorded paint stream for a frame.
///
/// `DrawList` is the [`Renderer`] HUD elements talk to during a frame. The GPU
/// `RectRenderer` consumes it afterwards, back-to-front in insertion order.
///
/// Performance characteristics:
/// - `push_rect()` is O(1)
/// - `clear()` keeps capacity, so a warmed list does not allocate per frame
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<RectCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns items in paint order.
    #[inline]
    pub fn items(&self) -> &[RectCmd] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn push_rect(&mut self, rect: NormRect, color: Color) {
        self.items.push(RectCmd::new(rect, color));
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &RectCmd> {
        self.items.iter()
    }
}

impl Renderer for DrawList {
    #[inline]
    fn draw_rect(&mut self, rect: NormRect, color: Color) {
        self.push_rect(rect, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_call_order() {
        let mut list = DrawList::new();
        let renderer: &mut dyn Renderer = &mut list;
        renderer.draw_rect(NormRect::new(0.5, 0.5, 1.0, 1.0), Color::black());
        renderer.draw_rect(NormRect::new(0.1, 0.1, 0.2, 0.2), Color::white());

        let colors: Vec<Color> = list.iter().map(|c| c.color).collect();
        assert_eq!(colors, vec![Color::black(), Color::white()]);
        assert_eq!(list.items()[1].rect, NormRect::new(0.1, 0.1, 0.2, 0.2));
    }

    #[test]
    fn clear_empties_but_keeps_capacity() {
        let mut list = DrawList::new();
        for _ in 0..32 {
            list.push_rect(NormRect::default(), Color::transparent());
        }
        let cap = list.items.capacity();
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.items.capacity(), cap);
    }

    #[test]
    fn degenerate_rects_are_recorded_untouched() {
        let mut list = DrawList::new();
        let rect = NormRect::new(-2.0, 3.0, -0.5, 0.0);
        list.draw_rect(rect, Color::rgba(255, 0, 0, 0));
        assert_eq!(list.len(), 1);
        assert_eq!(list.items()[0].rect, rect);
    }
}
