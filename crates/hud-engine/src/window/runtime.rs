use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App, AppControl, FrameCtx};
use crate::device::{Gpu, GpuInit};
use crate::screen::{Screen, ScreenMetrics};

/// Host window configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    /// Display aspect reported to elements as the scaled width basis.
    /// `None` uses the window's own ratio.
    pub aspect_ratio: Option<f32>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "hud".to_string(),
            initial_size: LogicalSize::new(1280.0, 720.0),
            aspect_ratio: None,
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the host window and drives `app` until the window closes, the app
    /// asks to exit, or something fails for good.
    ///
    /// Window creation, GPU setup and unrecoverable frame errors are returned
    /// here after the event loop has shut down.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: App + 'static,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut host = Host::new(config, gpu_init, app);

        event_loop
            .run_app(&mut host)
            .context("winit event loop terminated with error")?;

        host.lifecycle.into_result()
    }
}

/// Window plus the GPU surface that borrows it.
#[self_referencing]
struct HostWindow {
    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

fn open_window(
    event_loop: &ActiveEventLoop,
    config: &RuntimeConfig,
    gpu_init: GpuInit,
) -> Result<HostWindow> {
    let attrs = Window::default_attributes()
        .with_title(config.title.clone())
        .with_inner_size(config.initial_size);

    let window = event_loop
        .create_window(attrs)
        .context("failed to create window")?;

    HostWindowTryBuilder {
        window,
        gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
    }
    .try_build()
    .context("GPU initialization failed for window")
}

/// Logical-pixel metrics of `window`, with the configured display aspect.
fn screen_metrics(window: &Window, aspect_ratio: Option<f32>) -> ScreenMetrics {
    let logical: LogicalSize<f64> = window.inner_size().to_logical(window.scale_factor());
    let metrics = ScreenMetrics::new(logical.width as f32, logical.height as f32);
    match aspect_ratio {
        Some(ratio) => metrics.with_aspect_ratio(ratio),
        None => metrics,
    }
}

// ── lifecycle ─────────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum FrameStep {
    /// No drawable area (minimized or not laid out yet).
    Skip,
    /// First drawable frame: start the app, then draw.
    Start,
    Draw,
}

/// Start/stop bookkeeping, kept apart from winit so it can be tested.
#[derive(Debug, Default)]
struct Lifecycle {
    started: bool,
    stopped: bool,
    frame_index: u64,
    /// First unrecoverable error.
    fatal: Option<anyhow::Error>,
}

impl Lifecycle {
    fn frame_begin(&self, screen: &ScreenMetrics) -> FrameStep {
        if self.stopped || !screen.is_valid() {
            FrameStep::Skip
        } else if !self.started {
            FrameStep::Start
        } else {
            FrameStep::Draw
        }
    }

    fn mark_started(&mut self) {
        self.started = true;
    }

    fn frame_end(&mut self) {
        self.frame_index = self.frame_index.wrapping_add(1);
    }

    /// Stops the host. Only the first error is kept.
    fn stop(&mut self, err: Option<anyhow::Error>) {
        if let Some(err) = err {
            log::error!("hud host stopping: {err:#}");
            if self.fatal.is_none() {
                self.fatal = Some(err);
            }
        }
        self.stopped = true;
    }

    fn into_result(self) -> Result<()> {
        match self.fatal {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

// ── host ──────────────────────────────────────────────────────────────────

struct Host<A> {
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,
    window: Option<HostWindow>,
    lifecycle: Lifecycle,
}

impl<A: App> Host<A> {
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            config,
            gpu_init,
            app,
            window: None,
            lifecycle: Lifecycle::default(),
        }
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop, err: Option<anyhow::Error>) {
        self.lifecycle.stop(err);
        if self.window.take().is_some() {
            log::debug!("host window closed");
        }
        event_loop.exit();
    }

    fn redraw(&mut self) -> Result<AppControl> {
        let Self { config, app, window, lifecycle, .. } = self;
        let Some(entry) = window.as_mut() else {
            return Ok(AppControl::Continue);
        };

        entry.with_mut(|fields| -> Result<AppControl> {
            let screen = screen_metrics(fields.window, config.aspect_ratio);
            match lifecycle.frame_begin(&screen) {
                FrameStep::Skip => return Ok(AppControl::Continue),
                FrameStep::Start => {
                    log::debug!(
                        "hud start at {}x{} (scaled width {})",
                        screen.width,
                        screen.height,
                        screen.scaled_width()
                    );
                    app.on_start(&screen);
                    lifecycle.mark_started();
                }
                FrameStep::Draw => {}
            }

            let mut ctx = FrameCtx {
                window: fields.window,
                gpu: fields.gpu,
                screen,
                frame_index: lifecycle.frame_index,
            };
            let control = app.on_frame(&mut ctx)?;
            lifecycle.frame_end();
            Ok(control)
        })
    }
}

impl<A: App> ApplicationHandler for Host<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.lifecycle.stopped {
            return;
        }

        match open_window(event_loop, &self.config, self.gpu_init.clone()) {
            Ok(entry) => {
                log::debug!("host window created");
                entry.with_window(|w| w.request_redraw());
                self.window = Some(entry);
            }
            Err(err) => self.shutdown(event_loop, Some(err)),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        // The overlay is redrawn every frame, like the host it sits on.
        event_loop.set_control_flow(ControlFlow::Wait);
        if let Some(entry) = self.window.as_ref() {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if self.window.is_none() {
            return;
        }

        if self.app.on_window_event(&event) == AppControl::Exit {
            self.shutdown(event_loop, None);
            return;
        }

        match event {
            WindowEvent::CloseRequested => self.shutdown(event_loop, None),

            WindowEvent::Resized(new_size) => {
                if let Some(entry) = self.window.as_mut() {
                    entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                    entry.with_window(|w| w.request_redraw());
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(entry) = self.window.as_mut() {
                    let new_size = entry.with_window(|w| w.inner_size());
                    entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                    entry.with_window(|w| w.request_redraw());
                }
            }

            WindowEvent::RedrawRequested => match self.redraw() {
                Ok(AppControl::Continue) => {}
                Ok(AppControl::Exit) => self.shutdown(event_loop, None),
                Err(err) => self.shutdown(event_loop, Some(err.context("frame failed"))),
            },

            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_valid_frame_starts_once() {
        let mut life = Lifecycle::default();
        let screen = ScreenMetrics::new(1280.0, 720.0);

        assert_eq!(life.frame_begin(&screen), FrameStep::Start);
        life.mark_started();
        life.frame_end();
        assert_eq!(life.frame_begin(&screen), FrameStep::Draw);
        life.frame_end();
        assert_eq!(life.frame_index, 2);
    }

    #[test]
    fn empty_screen_is_skipped_without_starting() {
        let mut life = Lifecycle::default();
        assert_eq!(life.frame_begin(&ScreenMetrics::new(0.0, 0.0)), FrameStep::Skip);
        assert_eq!(life.frame_begin(&ScreenMetrics::new(800.0, 600.0)), FrameStep::Start);

        life.mark_started();
        // Minimized after start: still skipped, not restarted.
        assert_eq!(life.frame_begin(&ScreenMetrics::new(800.0, 0.0)), FrameStep::Skip);
        assert_eq!(life.frame_index, 0);
    }

    #[test]
    fn stopped_host_draws_nothing() {
        let mut life = Lifecycle::default();
        life.stop(None);
        assert_eq!(life.frame_begin(&ScreenMetrics::default()), FrameStep::Skip);
        assert!(life.into_result().is_ok());
    }

    #[test]
    fn first_fatal_error_is_returned() {
        let mut life = Lifecycle::default();
        life.stop(Some(anyhow::anyhow!("surface lost")));
        life.stop(Some(anyhow::anyhow!("later failure")));

        let err = life.into_result().unwrap_err();
        assert_eq!(err.to_string(), "surface lost");
    }

    #[test]
    fn default_config_follows_window_aspect() {
        let config = RuntimeConfig::default();
        assert_eq!(config.aspect_ratio, None);
        assert_eq!(config.initial_size, LogicalSize::new(1280.0, 720.0));
    }
}
