//! The producer/consumer repaint pipeline.
//!
//! Producers (one per animated body, plus whoever wants a region
//! re-presented) send [`RepaintRequest`]s over an mpsc channel. The single
//! consumer owns the canvas and the display: it composites requests in
//! receipt order and publishes at most once per frame interval, so a burst
//! of requests coalesces into one present. No producer is guaranteed an
//! individually presented frame; that decoupling is the point.

use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use arrayvec::ArrayVec;
use log::{debug, info};

use rasteroids_display::{Display, DisplayEvent};
use rasteroids_raster::Canvas;
use rasteroids_types::{Color, Point, Rect, FRAME_INTERVAL_MS};

use crate::pacer::{FpsMeter, FramePacer};

/// Dirty rectangles tracked per frame before collapsing to a union.
const MAX_DIRTY_RECTS: usize = 32;

/// A pending canvas mutation or re-present.
///
/// Transient: constructed by a producer, consumed exactly once, then
/// discarded (a composite's patch is dropped after compositing).
#[derive(Debug)]
pub enum RepaintRequest {
    /// Re-present a region of the canvas as-is.
    Present(Rect),
    /// Composite `src` of `patch` into the canvas at `at`, optionally
    /// clearing a previously occupied region back to the background first.
    Composite {
        at: Point,
        patch: Canvas,
        src: Rect,
        clear: Option<Rect>,
    },
}

/// The presentation consumer: sole owner of the canvas and the display.
pub struct Pipeline<D: Display> {
    display: D,
    canvas: Canvas,
    background: Color,
    pacer: FramePacer,
    fps: FpsMeter,
    dirty: ArrayVec<Rect, MAX_DIRTY_RECTS>,
}

impl<D: Display> Pipeline<D> {
    pub fn new(display: D, background: Color) -> Self {
        Self::with_interval(display, background, FRAME_INTERVAL_MS)
    }

    pub fn with_interval(display: D, background: Color, interval_ms: u64) -> Self {
        let mut canvas = Canvas::from_bounds(display.bounds());
        canvas.clear(background);
        let mut dirty = ArrayVec::new();
        dirty.push(canvas.bounds().as_rect());
        Self {
            display,
            canvas,
            background,
            pacer: FramePacer::new(interval_ms),
            fps: FpsMeter::new(),
            dirty,
        }
    }

    /// The shared canvas, for drawing static content before the loop runs.
    /// Only the consumer's control flow ever touches this.
    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Apply one request to the canvas and grow the dirty set.
    pub fn apply(&mut self, req: RepaintRequest) {
        match req {
            RepaintRequest::Present(rect) => self.mark_dirty(rect),
            RepaintRequest::Composite {
                at,
                patch,
                src,
                clear,
            } => {
                if let Some(c) = clear {
                    self.canvas.fill_rect(c, self.background);
                    self.mark_dirty(c);
                }
                self.canvas.composite_over(at, &patch, src);
                self.mark_dirty(Rect::new(at.x, at.y, src.w, src.h));
                // `patch` drops here; composite patches are transient.
            }
        }
    }

    fn mark_dirty(&mut self, rect: Rect) {
        let Some(clipped) = rect.intersect(self.canvas.bounds().as_rect()) else {
            return;
        };
        if self.dirty.try_push(clipped).is_err() {
            // Overflow: collapse everything into one bounding union.
            let union = self
                .dirty
                .iter()
                .fold(clipped, |acc, r| acc.union(*r));
            self.dirty.clear();
            self.dirty.push(union);
        }
    }

    /// Present if the frame deadline has passed and anything is dirty.
    ///
    /// On a due-but-clean frame the display's event machinery is still
    /// pumped so a static scene stays responsive.
    pub fn present_if_due(&mut self, now_ms: u64) -> Result<bool> {
        if !self.pacer.due(now_ms) {
            return Ok(false);
        }
        if self.dirty.is_empty() {
            self.display.pump();
            return Ok(false);
        }

        debug!("presenting {} dirty rect(s)", self.dirty.len());
        for rect in &self.dirty {
            self.display
                .upload(Point::new(rect.x, rect.y), &self.canvas, *rect);
        }
        self.display.publish()?;
        self.dirty.clear();

        if let Some(fps) = self.fps.record(now_ms) {
            info!("fps: {fps:.1}");
        }
        Ok(true)
    }

    /// Run the consumer loop until the display asks to close.
    ///
    /// Suspends on "next request arrived" or "frame deadline", whichever
    /// comes first. A hung-up channel (all producers done) keeps the loop
    /// alive for event handling; it just stops receiving.
    pub fn run(mut self, rx: Receiver<RepaintRequest>) -> Result<()> {
        let start = Instant::now();
        loop {
            match self.display.poll_event() {
                DisplayEvent::CloseRequested => {
                    info!("close requested; stopping pipeline");
                    return Ok(());
                }
                DisplayEvent::Paint => {
                    // The window system lost our pixels; re-present everything.
                    let full = self.canvas.bounds().as_rect();
                    self.mark_dirty(full);
                }
                DisplayEvent::Key(_) | DisplayEvent::None => {}
            }

            let wait = self.pacer.wait_ms(start.elapsed().as_millis() as u64);
            match rx.recv_timeout(Duration::from_millis(wait)) {
                Ok(req) => {
                    self.apply(req);
                    // Drain whatever else arrived; it all coalesces into
                    // this frame.
                    while let Ok(more) = rx.try_recv() {
                        self.apply(more);
                    }
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => {
                    thread::sleep(Duration::from_millis(wait.max(1)));
                }
            }

            self.present_if_due(start.elapsed().as_millis() as u64)?;
        }
    }
}
