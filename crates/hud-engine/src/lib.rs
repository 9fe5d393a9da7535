//! HUD engine crate.
//!
//! Owns the collaborators HUD elements draw through (screen metrics, the
//! rectangle renderer contract and its per-frame recording) and the platform +
//! GPU runtime that hosts them.

pub mod core;
pub mod device;
pub mod window;

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod screen;
