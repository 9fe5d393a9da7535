use hud_engine::screen::ScreenMetrics;

use crate::painter::Painter;

/// User HUD logic driven by [`Application`](crate::app::Application).
///
/// Scripts usually build their element tree in [`on_start`](Script::on_start),
/// keep [`Shared`](crate::element::Shared) handles to the parts that change,
/// and mutate + draw them in [`on_frame`](Script::on_frame).
///
/// Any `FnMut(&mut Painter<'_>)` closure is a script with a no-op `on_start`.
pub trait Script {
    /// Called once, before the first frame, with the metrics of that frame.
    fn on_start(&mut self, screen: &ScreenMetrics) {
        let _ = screen;
    }

    /// Called once per frame. Draw calls made through `painter` end up on
    /// screen this frame.
    fn on_frame(&mut self, painter: &mut Painter<'_>);
}

impl<F> Script for F
where
    F: FnMut(&mut Painter<'_>),
{
    fn on_frame(&mut self, painter: &mut Painter<'_>) {
        self(painter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hud_engine::scene::DrawList;

    use crate::element::Element;
    use crate::rectangle::Rectangle;

    fn run_frames(script: &mut dyn Script, screen: &ScreenMetrics, frames: usize) -> DrawList {
        let mut list = DrawList::new();
        script.on_start(screen);
        for _ in 0..frames {
            list.clear();
            let mut painter = Painter::new(screen, &mut list);
            script.on_frame(&mut painter);
        }
        list
    }

    #[test]
    fn closure_is_a_script() {
        let screen = ScreenMetrics::default();
        let rect = Rectangle::new((0.0, 0.0), (10.0, 10.0));
        let mut calls = 0;
        let mut script = |p: &mut Painter<'_>| {
            calls += 1;
            rect.draw(p);
        };

        let list = run_frames(&mut script, &screen, 3);
        assert_eq!(list.len(), 1);
        assert_eq!(calls, 3);
    }

    struct Blinker {
        started_with: Option<ScreenMetrics>,
        light: Option<Rectangle>,
    }

    impl Script for Blinker {
        fn on_start(&mut self, screen: &ScreenMetrics) {
            self.started_with = Some(*screen);
            self.light = Some(Rectangle::fullscreen(screen));
        }

        fn on_frame(&mut self, painter: &mut Painter<'_>) {
            if let Some(light) = self.light.as_mut() {
                light.set_enabled(!light.enabled());
                light.draw(painter);
            }
        }
    }

    #[test]
    fn struct_script_builds_in_on_start() {
        let screen = ScreenMetrics::new(640.0, 480.0);
        let mut script = Blinker { started_with: None, light: None };

        // Frame 1 turns the light off, frame 2 back on.
        let list = run_frames(&mut script, &screen, 2);
        assert_eq!(script.started_with, Some(screen));
        assert_eq!(list.len(), 1);

        let list = run_frames(&mut script, &screen, 1);
        assert!(list.is_empty());
    }
}
