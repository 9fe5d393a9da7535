use hud_engine::coords::{NormRect, Size, Vec2};
use hud_engine::paint::Color;
use hud_engine::screen::Screen;

use crate::element::Element;
use crate::painter::{Basis, Painter};

/// Filled, axis-aligned rectangle: the leaf HUD element.
///
/// Position and size are in pixels. On draw they are divided by the reference
/// dimensions of the active [`Basis`] and handed to the renderer as a
/// center-anchored [`NormRect`].
///
/// # Example
/// ```rust,ignore
/// let bar = Rectangle::with_color((20.0, 20.0), (200.0, 12.0), Color::rgb(200, 40, 40));
/// bar.draw(painter);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    enabled: bool,
    color: Color,
    position: Vec2,
    size: Size,
    centered: bool,
}

impl Rectangle {
    /// Transparent, top-left anchored, enabled.
    pub fn new(position: impl Into<Vec2>, size: impl Into<Size>) -> Self {
        Self::with_style(position, size, Color::transparent(), false)
    }

    pub fn with_color(position: impl Into<Vec2>, size: impl Into<Size>, color: Color) -> Self {
        Self::with_style(position, size, color, false)
    }

    pub fn with_style(
        position: impl Into<Vec2>,
        size: impl Into<Size>,
        color: Color,
        centered: bool,
    ) -> Self {
        Self {
            enabled: true,
            color,
            position: position.into(),
            size: size.into(),
            centered,
        }
    }

    /// Covers the whole screen as it is right now: origin, screen-sized,
    /// transparent.
    ///
    /// The size is captured once; later resizes of the screen are not tracked.
    pub fn fullscreen(screen: &dyn Screen) -> Self {
        Self::new(Vec2::zero(), Size::new(screen.width(), screen.height()))
    }

    /// Same rectangle painted with `color`.
    pub fn tinted(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Same rectangle with `position` read as its center (`true`) or its
    /// top-left corner (`false`).
    pub fn with_centered(mut self, centered: bool) -> Self {
        self.centered = centered;
        self
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    #[inline]
    pub fn set_size(&mut self, size: impl Into<Size>) {
        self.size = size.into();
    }

    /// Normalized, center-anchored bounds of this rectangle shifted by
    /// `offset`, against `reference` (`width`, `height`) pixels.
    ///
    /// Ignores `enabled`. A top-left anchored rectangle has its center moved
    /// forward by half its normalized extent.
    pub fn normalized(&self, offset: Vec2, reference: Size) -> NormRect {
        let w = self.size.width / reference.width;
        let h = self.size.height / reference.height;
        let mut x = (self.position.x + offset.x) / reference.width;
        let mut y = (self.position.y + offset.y) / reference.height;

        if !self.centered {
            x += w * 0.5;
            y += h * 0.5;
        }

        NormRect::new(x, y, w, h)
    }
}

impl Element for Rectangle {
    fn enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn color(&self) -> Color {
        self.color
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn position(&self) -> Vec2 {
        self.position
    }

    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    fn centered(&self) -> bool {
        self.centered
    }

    fn set_centered(&mut self, centered: bool) {
        self.centered = centered;
    }

    fn paint(&self, painter: &mut Painter<'_>, offset: Vec2, basis: Basis) {
        if !self.enabled {
            return;
        }
        let rect = self.normalized(offset, painter.reference(basis));
        painter.fill_rect(rect, self.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hud_engine::scene::DrawList;
    use hud_engine::screen::ScreenMetrics;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    fn assert_rect(got: NormRect, x: f32, y: f32, w: f32, h: f32) {
        assert!(
            approx(got.x, x) && approx(got.y, y) && approx(got.w, w) && approx(got.h, h),
            "got {got:?}, want ({x}, {y}, {w}, {h})"
        );
    }

    fn record(screen: &ScreenMetrics, f: impl FnOnce(&mut Painter<'_>)) -> DrawList {
        let mut list = DrawList::new();
        let mut painter = Painter::new(screen, &mut list);
        f(&mut painter);
        list
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn new_defaults() {
        let r = Rectangle::new((1.0, 2.0), (3.0, 4.0));
        assert!(r.enabled());
        assert!(!r.centered());
        assert_eq!(r.color(), Color::transparent());
        assert_eq!(r.position(), Vec2::new(1.0, 2.0));
        assert_eq!(r.size(), Size::new(3.0, 4.0));
    }

    #[test]
    fn fullscreen_takes_screen_size() {
        let screen = ScreenMetrics::new(1280.0, 720.0);
        let r = Rectangle::fullscreen(&screen);
        assert_eq!(r.position(), Vec2::zero());
        assert_eq!(r.size(), Size::new(1280.0, 720.0));
        assert_eq!(r.color(), Color::transparent());
    }

    #[test]
    fn adjusters_chain_onto_constructors() {
        let r = Rectangle::new((960.0, 540.0), (192.0, 108.0))
            .tinted(Color::rgb(9, 8, 7))
            .with_centered(true);
        assert_eq!(r, Rectangle::with_style((960.0, 540.0), (192.0, 108.0), Color::rgb(9, 8, 7), true));

        let screen = ScreenMetrics::new(1920.0, 1080.0);
        let list = record(&screen, |p| r.draw(p));
        assert_rect(list.items()[0].rect, 0.5, 0.5, 0.1, 0.1);
        assert_eq!(list.items()[0].color, Color::rgb(9, 8, 7));

        let corner = r.with_centered(false);
        assert!(!corner.centered());
        assert_eq!(corner.position(), Vec2::new(960.0, 540.0));
    }

    // ── transform ─────────────────────────────────────────────────────────

    #[test]
    fn top_left_anchor_shifts_center_by_half_extent() {
        let screen = ScreenMetrics::new(1920.0, 1080.0);
        let r = Rectangle::with_color((100.0, 50.0), (200.0, 100.0), Color::white());
        let list = record(&screen, |p| r.draw(p));

        assert_eq!(list.len(), 1);
        let cmd = list.items()[0];
        assert_rect(
            cmd.rect,
            100.0 / 1920.0 + 200.0 / 3840.0,
            50.0 / 1080.0 + 100.0 / 2160.0,
            200.0 / 1920.0,
            100.0 / 1080.0,
        );
        assert!(approx(cmd.rect.x, 0.104_166_7));
        assert!(approx(cmd.rect.y, 0.092_592_6));
        assert_eq!(cmd.color, Color::white());
    }

    #[test]
    fn centered_anchor_uses_position_as_center() {
        let screen = ScreenMetrics::new(1920.0, 1080.0);
        let r = Rectangle::with_style((960.0, 540.0), (192.0, 108.0), Color::black(), true);
        let list = record(&screen, |p| r.draw(p));
        assert_rect(list.items()[0].rect, 0.5, 0.5, 0.1, 0.1);
    }

    #[test]
    fn offset_is_added_before_normalizing() {
        let screen = ScreenMetrics::new(1000.0, 500.0);
        let r = Rectangle::new((10.0, 20.0), (100.0, 50.0));
        let list = record(&screen, |p| r.draw_offset(p, Vec2::new(90.0, 30.0)));
        // (10+90)/1000 + 0.05, (20+30)/500 + 0.05
        assert_rect(list.items()[0].rect, 0.15, 0.15, 0.1, 0.1);
    }

    #[test]
    fn scaled_draw_only_rescales_horizontal_terms() {
        let screen = ScreenMetrics::new(1000.0, 500.0).with_aspect_ratio(4.0);
        let r = Rectangle::new((100.0, 100.0), (200.0, 50.0));

        let list = record(&screen, |p| {
            r.scaled_draw(p);
            r.scaled_draw_offset(p, Vec2::new(200.0, 0.0));
        });

        // Scaled width is 2000; height stays 500.
        assert_rect(list.items()[0].rect, 0.05 + 0.05, 0.2 + 0.05, 0.1, 0.1);
        assert_rect(list.items()[1].rect, 0.15 + 0.05, 0.2 + 0.05, 0.1, 0.1);
    }

    #[test]
    fn degenerate_sizes_pass_through() {
        let r = Rectangle::new((0.0, 0.0), (-100.0, 0.0));
        let got = r.normalized(Vec2::zero(), Size::new(1000.0, 1000.0));
        assert_rect(got, -0.05, 0.0, -0.1, 0.0);
    }

    // ── enabled gating ────────────────────────────────────────────────────

    #[test]
    fn disabled_rectangle_paints_nothing() {
        let screen = ScreenMetrics::default();
        let mut r = Rectangle::with_color((0.0, 0.0), (10.0, 10.0), Color::white());
        r.set_enabled(false);

        let list = record(&screen, |p| {
            r.draw(p);
            r.draw_offset(p, Vec2::new(5.0, 5.0));
            r.scaled_draw(p);
            r.scaled_draw_offset(p, Vec2::new(5.0, 5.0));
        });
        assert!(list.is_empty());
    }

    #[test]
    fn setters_take_effect_on_next_draw() {
        let screen = ScreenMetrics::new(100.0, 100.0);
        let mut r = Rectangle::new((0.0, 0.0), (10.0, 10.0));
        r.set_position(Vec2::new(50.0, 50.0));
        r.set_centered(true);
        r.set_size((20.0, 40.0));
        r.set_color(Color::rgb(1, 2, 3));

        let list = record(&screen, |p| r.draw(p));
        assert_rect(list.items()[0].rect, 0.5, 0.5, 0.2, 0.4);
        assert_eq!(list.items()[0].color, Color::rgb(1, 2, 3));
    }
}
