//! The Display collaborator: a window that shows a raw pixel buffer.
//!
//! The engine depends only on this trait: upload a sub-rectangle of the
//! canvas, publish, and poll for lifecycle/key events. Backends:
//!
//! - [`MinifbDisplay`]: a real window.
//! - [`HeadlessDisplay`]: records calls; for tests and windowless runs.

pub mod headless;
pub mod window;

use std::fmt;

use rasteroids_raster::Canvas;
use rasteroids_types::{Bounds, Point, Rect};

pub use headless::HeadlessDisplay;
pub use window::MinifbDisplay;

/// Display-side failures. Window/buffer creation failure is fatal before
/// the animation loop starts; publish failures surface through the loop.
#[derive(Debug)]
pub enum DisplayError {
    WindowInit(String),
    Publish(String),
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayError::WindowInit(s) => write!(f, "window init error: {s}"),
            DisplayError::Publish(s) => write!(f, "publish error: {s}"),
        }
    }
}

impl std::error::Error for DisplayError {}

/// Keys the demos react to; everything else maps to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Escape,
    Up,
    Down,
    Left,
    Right,
    Other,
}

/// Events a display backend can report.
///
/// The engine treats `CloseRequested` as the termination signal and
/// everything else as a no-op (or a repaint hint, for `Paint`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayEvent {
    None,
    Paint,
    Key(KeyCode),
    CloseRequested,
}

/// A window with an attached pixel buffer.
pub trait Display {
    /// Extent of the window's pixel buffer.
    fn bounds(&self) -> Bounds;

    /// Copy `src` of `canvas` into the window buffer at `dest`.
    fn upload(&mut self, dest: Point, canvas: &Canvas, src: Rect);

    /// Make previous uploads visible.
    fn publish(&mut self) -> Result<(), DisplayError>;

    /// Pump the backend's event machinery on frames with nothing to
    /// publish. Default: nothing to pump.
    fn pump(&mut self) {}

    /// Poll for the next pending event, non-blocking.
    fn poll_event(&mut self) -> DisplayEvent;
}
