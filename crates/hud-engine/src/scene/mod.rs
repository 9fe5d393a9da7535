//! Scene (paint queue) types.
//!
//! Responsibilities:
//! - record renderer-agnostic rectangle paint calls for one frame
//! - preserve call order, which is the only z-ordering HUD elements get

mod list;

pub use list::{DrawList, RectCmd};
