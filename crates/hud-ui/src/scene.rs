use hud_engine::scene::DrawList;
use hud_engine::screen::Screen;

use crate::element::Element;
use crate::painter::Painter;

// ── HudScene ──────────────────────────────────────────────────────────────

/// Per-frame coordinator that owns the [`DrawList`].
///
/// Each `frame*` call clears the list, runs one draw pass through a fresh
/// [`Painter`], and returns the list for the GPU renderer.
///
/// # Example
///
/// ```rust,ignore
/// let mut hud = HudScene::new();
///
/// // In your on_frame callback:
/// let draw_list = hud.frame(&root, &screen);
/// rect_renderer.render(rctx, target, draw_list);
/// ```
#[derive(Debug, Default)]
pub struct HudScene {
    /// Draw list populated by the most recent frame.
    ///
    /// Public so the host can split-borrow it alongside its renderer.
    pub draw_list: DrawList,
}

impl HudScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws `root` against the screen width.
    pub fn frame(&mut self, root: &dyn Element, screen: &dyn Screen) -> &mut DrawList {
        self.frame_with(screen, |painter| root.draw(painter))
    }

    /// Draws `root` against the scaled width.
    pub fn frame_scaled(&mut self, root: &dyn Element, screen: &dyn Screen) -> &mut DrawList {
        self.frame_with(screen, |painter| root.scaled_draw(painter))
    }

    /// Runs arbitrary drawing code for one frame.
    pub fn frame_with<F>(&mut self, screen: &dyn Screen, draw: F) -> &mut DrawList
    where
        F: FnOnce(&mut Painter<'_>),
    {
        self.draw_list.clear();

        let mut painter = Painter::new(screen, &mut self.draw_list);
        draw(&mut painter);
        log::trace!("hud frame: {} rects", painter.rects_painted());

        &mut self.draw_list
    }
}
