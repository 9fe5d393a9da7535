use anyhow::Result;
use winit::dpi::LogicalSize;

use hud_engine::core::{App as EngineApp, AppControl, FrameCtx};
use hud_engine::device::GpuInit;
use hud_engine::paint::Color;
use hud_engine::render::shapes::rect::RectRenderer;
use hud_engine::screen::ScreenMetrics;
use hud_engine::window::{Runtime, RuntimeConfig};

use crate::scene::HudScene;
use crate::script::Script;

// ── Application ───────────────────────────────────────────────────────────

/// Top-level HUD host builder.
///
/// Opens a window that stands in for the host's video output, clears it with
/// the backdrop color every frame, runs the [`Script`] and renders whatever it
/// drew on top.
///
/// ```rust,ignore
/// Application::new()
///     .title("Overlay")
///     .size(1280.0, 720.0)
///     .aspect_ratio(16.0 / 9.0)
///     .run(|painter: &mut Painter<'_>| hud.draw(painter))?;
/// ```
pub struct Application {
    title:        String,
    width:        f64,
    height:       f64,
    aspect_ratio: Option<f32>,
    backdrop:     Color,
    gpu:          GpuInit,
}

impl Application {
    pub fn new() -> Self {
        Self {
            title:        "hud".to_string(),
            width:        1280.0,
            height:       720.0,
            aspect_ratio: None,
            backdrop:     Color::rgb(18, 18, 23),
            gpu:          GpuInit::default(),
        }
    }

    /// Set the window title.
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = t.into();
        self
    }

    /// Set the initial window size in logical pixels.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width  = width;
        self.height = height;
        self
    }

    /// Display aspect ratio used for the scaled width.
    ///
    /// Without it the window's own `width / height` is used, which makes
    /// scaled draws identical to plain ones.
    pub fn aspect_ratio(mut self, ratio: f32) -> Self {
        self.aspect_ratio = Some(ratio);
        self
    }

    /// Clear color painted under the HUD each frame.
    pub fn backdrop(mut self, color: Color) -> Self {
        self.backdrop = color;
        self
    }

    /// GPU surface and device options.
    pub fn gpu(mut self, init: GpuInit) -> Self {
        self.gpu = init;
        self
    }

    /// Runs the event loop until the window is closed.
    ///
    /// Returns an error if the window or GPU could not be set up, or if the
    /// surface was lost for good.
    pub fn run<S>(self, script: S) -> Result<()>
    where
        S: Script + 'static,
    {
        let config = self.runtime_config();
        log::info!(
            "starting hud '{}' ({}x{}, aspect {:?})",
            config.title,
            self.width,
            self.height,
            self.aspect_ratio
        );

        let state = HostState::new(script, self.backdrop);
        Runtime::run(config, self.gpu, state)
    }

    fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            title:        self.title.clone(),
            initial_size: LogicalSize::new(self.width, self.height),
            aspect_ratio: self.aspect_ratio,
        }
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

// ── HostState ─────────────────────────────────────────────────────────────

/// Internal state that implements `hud_engine::core::App`.
///
/// Owns the scene and the GPU renderer; scripts never see either.
struct HostState<S> {
    script:        S,
    backdrop:      Color,
    scene:         HudScene,
    rect_renderer: RectRenderer,
}

impl<S: Script> HostState<S> {
    fn new(script: S, backdrop: Color) -> Self {
        Self {
            script,
            backdrop,
            scene: HudScene::new(),
            rect_renderer: RectRenderer::new(),
        }
    }
}

impl<S: Script> EngineApp for HostState<S> {
    fn on_start(&mut self, screen: &ScreenMetrics) {
        self.script.on_start(screen);
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> Result<AppControl> {
        // ── Paint ─────────────────────────────────────────────────────────
        let script = &mut self.script;
        let draw_list = self.scene.frame_with(&ctx.screen, |painter| script.on_frame(painter));

        // ── Render ────────────────────────────────────────────────────────
        let renderer = &mut self.rect_renderer;
        ctx.render(self.backdrop, |rctx, target| {
            renderer.render(rctx, target, draw_list);
        })?;

        Ok(AppControl::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let app = Application::default();
        let config = app.runtime_config();
        assert_eq!(config.title, "hud");
        assert_eq!(config.initial_size, LogicalSize::new(1280.0, 720.0));
        assert_eq!(config.aspect_ratio, None);
        assert!(app.gpu.prefer_srgb);
    }

    #[test]
    fn builder_overrides() {
        let app = Application::new()
            .title("overlay")
            .size(800.0, 600.0)
            .aspect_ratio(16.0 / 9.0)
            .backdrop(Color::black());

        let config = app.runtime_config();
        assert_eq!(config.title, "overlay");
        assert_eq!(config.initial_size, LogicalSize::new(800.0, 600.0));
        assert_eq!(config.aspect_ratio, Some(16.0 / 9.0));
        assert_eq!(app.backdrop, Color::black());
    }
}
