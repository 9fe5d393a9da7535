use anyhow::Result;

use hud_engine::logging::{init_logging, LoggingConfig};
use hud_ui::prelude::*;

/// Frames over which the simulated health drains from full to empty.
const DRAIN_FRAMES: u64 = 600;
const LOW_HEALTH: f32 = 0.25;

const BAR_WIDTH: f32 = 240.0;
const BAR_HEIGHT: f32 = 14.0;
const BAR_PADDING: f32 = 4.0;

const HEALTHY: Color = Color::rgb(70, 200, 90);
const CRITICAL: Color = Color::rgb(220, 60, 50);
const DEFAULT_BACKDROP: Color = Color::rgb(32, 48, 64);

/// Backdrop override, `#rrggbb` or `#rrggbbaa`.
const BACKDROP_ENV: &str = "HUD_BACKDROP";

/// Demo overlay: a draining health bar, a square minimap frame in the corner,
/// and a blinking warning once health runs low.
struct DemoHud {
    frame: u64,
    health_panel: Container,
    health_fill: Shared<Rectangle>,
    minimap: Container,
    warning: Shared<Rectangle>,
}

impl DemoHud {
    fn new() -> Self {
        let mut health_panel = Container::with_color(
            (24.0, 24.0),
            (BAR_WIDTH + BAR_PADDING * 2.0, BAR_HEIGHT + BAR_PADDING * 2.0),
            Color::black().with_alpha(170),
        );
        let health_fill = health_panel.add(Rectangle::with_color(
            (BAR_PADDING, BAR_PADDING),
            (BAR_WIDTH, BAR_HEIGHT),
            HEALTHY,
        ));

        // Placed in on_start once the screen size is known.
        let mut minimap = Container::with_color((0.0, 0.0), (180.0, 180.0), Color::rgba(20, 30, 40, 200));
        minimap.add(Rectangle::with_color((4.0, 4.0), (172.0, 172.0), Color::rgba(40, 60, 70, 220)));
        minimap.add(Rectangle::with_style((90.0, 90.0), (8.0, 8.0), Color::rgb(240, 220, 60), true));

        let warning = shared(
            Rectangle::new((0.0, 0.0), (320.0, 48.0))
                .tinted(CRITICAL.with_alpha(190))
                .with_centered(true),
        );

        Self { frame: 0, health_panel, health_fill, minimap, warning }
    }

    fn health(&self) -> f32 {
        let t = (self.frame % DRAIN_FRAMES) as f32 / DRAIN_FRAMES as f32;
        1.0 - t
    }
}

impl Script for DemoHud {
    fn on_start(&mut self, screen: &ScreenMetrics) {
        log::info!(
            "hud started on {}x{} (scaled width {})",
            screen.width,
            screen.height,
            screen.scaled_width()
        );

        // Minimap is laid out against the scaled width so it stays square.
        let size = self.minimap.size();
        self.minimap
            .set_position(Vec2::new(screen.scaled_width() - size.width - 24.0, 24.0));

        self.warning
            .borrow_mut()
            .set_position(Vec2::new(screen.width * 0.5, screen.height * 0.75));
    }

    fn on_frame(&mut self, painter: &mut Painter<'_>) {
        let health = self.health();

        {
            let mut fill = self.health_fill.borrow_mut();
            fill.set_size((BAR_WIDTH * health, BAR_HEIGHT));
            fill.set_color(if health < LOW_HEALTH { CRITICAL } else { HEALTHY });
        }

        {
            let blink = (self.frame / 20) % 2 == 0;
            self.warning.borrow_mut().set_enabled(health < LOW_HEALTH && blink);
        }

        self.health_panel.draw(painter);
        self.minimap.scaled_draw(painter);
        self.warning.borrow().draw(painter);

        self.frame = self.frame.wrapping_add(1);
    }
}

/// Backdrop from an optional hex override, falling back to the default slate.
fn backdrop(hex: Option<&str>) -> Color {
    let Some(hex) = hex else {
        return DEFAULT_BACKDROP;
    };
    Color::from_hex(hex).unwrap_or_else(|| {
        log::warn!("{BACKDROP_ENV}={hex:?} is not a hex color; using default");
        DEFAULT_BACKDROP
    })
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    Application::new()
        .title("HUD Studio")
        .size(1280.0, 720.0)
        .backdrop(backdrop(std::env::var(BACKDROP_ENV).ok().as_deref()))
        .run(DemoHud::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_override_parses_hex() {
        assert_eq!(backdrop(None), DEFAULT_BACKDROP);
        assert_eq!(backdrop(Some("#102030")), Color::rgb(16, 32, 48));
        assert_eq!(backdrop(Some("10203080")), Color::rgba(16, 32, 48, 128));
        assert_eq!(backdrop(Some("slate")), DEFAULT_BACKDROP);
    }

    #[test]
    fn warning_only_blinks_on_low_health() {
        let screen = ScreenMetrics::new(1280.0, 720.0);
        let mut hud = DemoHud::new();
        hud.on_start(&screen);
        assert_eq!(hud.warning.borrow().position(), Vec2::new(640.0, 540.0));

        let mut list = hud_engine::scene::DrawList::new();
        let mut painter = Painter::new(&screen, &mut list);
        hud.on_frame(&mut painter);
        // panel + fill, minimap + 2 items; warning hidden at full health.
        assert_eq!(painter.rects_painted(), 5);

        // Health about 0.07, blink phase on.
        hud.frame = 560;
        let mut list = hud_engine::scene::DrawList::new();
        let mut painter = Painter::new(&screen, &mut list);
        hud.on_frame(&mut painter);
        assert_eq!(painter.rects_painted(), 6);
        assert_eq!(hud.health_fill.borrow().color(), CRITICAL);
    }
}
