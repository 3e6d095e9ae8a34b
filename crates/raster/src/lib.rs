//! Software rasterization: the RGBA canvas and pixel-level drawing primitives.
//!
//! Everything here operates directly on raw pixel memory. All writes clip
//! silently to the canvas extent; off-screen drawing is a normal occurrence
//! (bodies near edges, perspective vertices) and never an error.

pub mod canvas;
pub mod draw;

pub use canvas::Canvas;
pub use draw::{circle_outline, fill_convex_quad, filled_disc, line};

pub use rasteroids_types as types;
