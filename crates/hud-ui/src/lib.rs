//! HUD UI: rectangles and containers drawn in normalized screen space on top
//! of `hud-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use hud_ui::prelude::*;
//!
//! let mut panel = Container::with_color((20.0, 20.0), (220.0, 40.0), Color::rgba(0, 0, 0, 160));
//! let fill = panel.add(Rectangle::with_color((10.0, 10.0), (200.0, 20.0), Color::rgb(60, 200, 90)));
//!
//! Application::new()
//!     .title("Overlay")
//!     .run(move |painter: &mut Painter<'_>| {
//!         fill.borrow_mut().set_size((health() * 2.0, 20.0));
//!         panel.draw(painter);
//!     })?;
//! ```
//!
//! # Coordinates
//!
//! Elements are positioned and sized in pixels. On draw every element is
//! converted to a center-anchored rectangle whose components are fractions of
//! the reference width and the screen height. [`Element::draw`] uses the
//! screen width; [`Element::scaled_draw`] uses the aspect-corrected scaled
//! width for the whole subtree.
//!
//! # Custom elements
//!
//! Implement [`Element`] for any `'static` type; it can then be pushed into a
//! [`Container`] like the built-in ones.

pub mod app;
pub mod container;
pub mod element;
pub mod painter;
pub mod rectangle;
pub mod scene;
pub mod script;

pub use app::Application;
pub use container::Container;
pub use element::{shared, Element, ElementRef, Shared};
pub use rectangle::Rectangle;

/// Everything a HUD script needs.
pub mod prelude {
    pub use crate::app::Application;
    pub use crate::container::Container;
    pub use crate::element::{shared, Element, ElementRef, Shared};
    pub use crate::painter::{Basis, Painter};
    pub use crate::rectangle::Rectangle;
    pub use crate::scene::HudScene;
    pub use crate::script::Script;

    // Engine primitives scripts touch directly.
    pub use hud_engine::coords::{NormRect, Size, Vec2};
    pub use hud_engine::paint::Color;
    pub use hud_engine::screen::{Screen, ScreenMetrics};
}
