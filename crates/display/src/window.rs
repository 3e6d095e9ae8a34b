//! Real window backend over minifb.

use log::trace;
use minifb::{Key, Window, WindowOptions};

use rasteroids_raster::Canvas;
use rasteroids_types::{Bounds, Point, Rect};

use crate::{Display, DisplayError, DisplayEvent, KeyCode};

/// A window plus its packed shadow buffer.
///
/// Uploads write into the shadow buffer; publish hands the whole shadow
/// buffer to the window (minifb has no partial-update API, so the dirty
/// rectangle granularity lives in the uploads, not the flip).
pub struct MinifbDisplay {
    window: Window,
    shadow: Vec<u32>,
    bounds: Bounds,
}

impl MinifbDisplay {
    pub fn new(title: &str, bounds: Bounds) -> Result<Self, DisplayError> {
        let window = Window::new(
            title,
            bounds.width() as usize,
            bounds.height() as usize,
            WindowOptions::default(),
        )
        .map_err(|e| DisplayError::WindowInit(e.to_string()))?;

        let shadow = vec![0u32; (bounds.width() as usize) * (bounds.height() as usize)];
        Ok(Self {
            window,
            shadow,
            bounds,
        })
    }
}

impl Display for MinifbDisplay {
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn upload(&mut self, dest: Point, canvas: &Canvas, src: Rect) {
        // Canvas and window share an extent, so dest/src carry the same
        // offset and packing can clip per-rectangle.
        debug_assert_eq!(dest, Point::new(src.x, src.y));
        canvas.pack_0rgb_into(src, &mut self.shadow);
    }

    fn publish(&mut self) -> Result<(), DisplayError> {
        self.window
            .update_with_buffer(
                &self.shadow,
                self.bounds.width() as usize,
                self.bounds.height() as usize,
            )
            .map_err(|e| DisplayError::Publish(e.to_string()))
    }

    fn pump(&mut self) {
        self.window.update();
    }

    fn poll_event(&mut self) -> DisplayEvent {
        if !self.window.is_open() || self.window.is_key_down(Key::Escape) {
            trace!("window close requested");
            return DisplayEvent::CloseRequested;
        }
        for (key, code) in [
            (Key::Up, KeyCode::Up),
            (Key::Down, KeyCode::Down),
            (Key::Left, KeyCode::Left),
            (Key::Right, KeyCode::Right),
        ] {
            if self.window.is_key_pressed(key, minifb::KeyRepeat::No) {
                return DisplayEvent::Key(code);
            }
        }
        DisplayEvent::None
    }
}
