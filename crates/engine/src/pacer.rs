//! Frame pacing and FPS observation over a millisecond clock.
//!
//! Both types take explicit `now_ms` values rather than reading a clock, so
//! the pipeline's timing is testable without real time passing.

use rasteroids_types::FPS_REPORT_INTERVAL_MS;

/// Gates presentation to at most once per fixed interval.
///
/// The first frame is due immediately.
#[derive(Debug, Clone)]
pub struct FramePacer {
    interval_ms: u64,
    next_due_ms: u64,
}

impl FramePacer {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            next_due_ms: 0,
        }
    }

    /// Whether a frame is due now. Consuming: a `true` answer schedules the
    /// next deadline one interval out.
    pub fn due(&mut self, now_ms: u64) -> bool {
        if now_ms >= self.next_due_ms {
            self.next_due_ms = now_ms + self.interval_ms;
            true
        } else {
            false
        }
    }

    /// Milliseconds until the next deadline.
    pub fn wait_ms(&self, now_ms: u64) -> u64 {
        self.next_due_ms.saturating_sub(now_ms)
    }
}

/// Counts presented frames and reports measured FPS once per wall-clock
/// second. Purely observational; never gates behavior.
#[derive(Debug, Clone, Default)]
pub struct FpsMeter {
    window_start_ms: u64,
    frames: u32,
}

impl FpsMeter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one presented frame; returns `Some(fps)` when a full report
    /// window has elapsed, resetting the counter.
    pub fn record(&mut self, now_ms: u64) -> Option<f64> {
        self.frames += 1;
        let elapsed = now_ms.saturating_sub(self.window_start_ms);
        if elapsed >= FPS_REPORT_INTERVAL_MS {
            let fps = self.frames as f64 * 1000.0 / elapsed as f64;
            self.window_start_ms = now_ms;
            self.frames = 0;
            Some(fps)
        } else {
            None
        }
    }
}
