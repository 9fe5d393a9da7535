//! Paint model shared between HUD elements and renderers.
//!
//! Elements carry straight-alpha sRGB bytes, the format scripts author in.
//! Conversion to the linear premultiplied floats the GPU blends with happens
//! once, at upload time.

pub mod color;

pub use color::Color;
