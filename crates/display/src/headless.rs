//! Windowless backend that records every call it receives.

use std::collections::VecDeque;

use rasteroids_raster::Canvas;
use rasteroids_types::{Bounds, Point, Rect};

use crate::{Display, DisplayError, DisplayEvent};

/// Records uploads and publishes; events are scripted by the test.
#[derive(Debug)]
pub struct HeadlessDisplay {
    bounds: Bounds,
    uploads: Vec<(Point, Rect)>,
    publishes: usize,
    pumps: usize,
    events: VecDeque<DisplayEvent>,
}

impl HeadlessDisplay {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            uploads: Vec::new(),
            publishes: 0,
            pumps: 0,
            events: VecDeque::new(),
        }
    }

    /// Queue an event to be returned by `poll_event`.
    pub fn push_event(&mut self, event: DisplayEvent) {
        self.events.push_back(event);
    }

    pub fn uploads(&self) -> &[(Point, Rect)] {
        &self.uploads
    }

    pub fn publishes(&self) -> usize {
        self.publishes
    }

    pub fn pumps(&self) -> usize {
        self.pumps
    }
}

impl Display for HeadlessDisplay {
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn upload(&mut self, dest: Point, _canvas: &Canvas, src: Rect) {
        self.uploads.push((dest, src));
    }

    fn publish(&mut self) -> Result<(), DisplayError> {
        self.publishes += 1;
        Ok(())
    }

    fn pump(&mut self) {
        self.pumps += 1;
    }

    fn poll_event(&mut self) -> DisplayEvent {
        self.events.pop_front().unwrap_or(DisplayEvent::None)
    }
}
