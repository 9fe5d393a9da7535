//! Core engine-facing contracts.
//!
//! Defines the interface between the runtime (platform loop) and the HUD host
//! layered on top. Window and GPU internals stay behind a per-frame context.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::FrameCtx;
