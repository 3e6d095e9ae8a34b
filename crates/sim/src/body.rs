//! Animated bounded bodies ("asteroids").
//!
//! A body owns its whole mutable state; no two ticks of the same body run
//! concurrently, and bodies never share state with each other. Each tick
//! yields a [`Placement`] that must be funneled through the repaint
//! pipeline before it touches the shared canvas.

use rasteroids_raster::Canvas;
use rasteroids_types::{Bounds, Color, Point, Rect};

use crate::rng::SimpleRng;

/// How a body moves between ticks.
///
/// Both variants satisfy the same contract: produce a sprite placement each
/// tick, update state for the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionPolicy {
    /// Elastic bounce against axis-aligned walls; corners invert both axes
    /// independently.
    Bounce,
    /// Reposition uniformly inside the bounds each tick.
    RandomRespawn,
}

/// Why a tick could not produce a drawable placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickError {
    DegenerateSprite,
}

impl TickError {
    pub fn message(self) -> &'static str {
        match self {
            TickError::DegenerateSprite => "sprite has zero area",
        }
    }
}

/// One tick's output: where to composite which patch.
///
/// `prev` is the sprite's previous location, to be cleared back to the
/// background before compositing. The patch is transient; the pipeline
/// drops it after compositing.
#[derive(Debug, Clone)]
pub struct Placement {
    pub at: Point,
    pub sprite: Canvas,
    pub prev: Option<Rect>,
    pub moved: bool,
}

/// A moving bounded entity: position, velocity, sprite size and color.
#[derive(Debug, Clone)]
pub struct Body {
    bounds: Bounds,
    size: u32,
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
    color: Color,
    tick_interval_ms: u64,
    policy: MotionPolicy,
    rng: SimpleRng,
    prev: Option<Rect>,
}

impl Body {
    /// Create a body at a seeded-random position inside `bounds`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        bounds: Bounds,
        size: u32,
        vx: f64,
        vy: f64,
        tick_interval_ms: u64,
        color: Color,
        policy: MotionPolicy,
        mut rng: SimpleRng,
    ) -> Self {
        let x = rng.next_f64() * bounds.width() as f64;
        let y = rng.next_f64() * bounds.height() as f64;
        Self {
            bounds,
            size,
            x,
            y,
            vx,
            vy,
            color,
            tick_interval_ms,
            policy,
            rng,
            prev: None,
        }
    }

    /// Spawn a body with randomized size, velocity, pacing and a web-safe
    /// palette color, all drawn from `rng`.
    pub fn random(bounds: Bounds, policy: MotionPolicy, rng: &mut SimpleRng) -> Self {
        let size = 20 + rng.next_range(80);
        let vx = rng.next_f64() * 10.0 - rng.next_f64() * 20.0;
        let vy = rng.next_f64() * 10.0 - rng.next_f64() * 20.0;
        let tick_interval_ms = 8 + rng.next_range(25) as u64;
        // Web-safe palette: each channel one of six levels.
        let color = Color::rgb(
            (rng.next_range(6) * 51) as u8,
            (rng.next_range(6) * 51) as u8,
            (rng.next_range(6) * 51) as u8,
        );
        Self::new(bounds, size, vx, vy, tick_interval_ms, color, policy, rng.fork())
    }

    /// Milliseconds between this body's ticks.
    pub fn tick_interval_ms(&self) -> u64 {
        self.tick_interval_ms
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    pub fn velocity(&self) -> (f64, f64) {
        (self.vx, self.vy)
    }

    /// Place the body explicitly (demos and tests).
    pub fn set_position(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// Advance one simulation tick and produce the sprite placement for the
    /// pre-advance position.
    pub fn tick(&mut self) -> Result<Placement, TickError> {
        if self.size == 0 {
            return Err(TickError::DegenerateSprite);
        }

        // Defensive clamp; not expected to trigger in normal operation.
        self.x = self.x.clamp(0.0, self.bounds.width() as f64);
        self.y = self.y.clamp(0.0, self.bounds.height() as f64);

        let at = Point::new(self.x as i32, self.y as i32);

        match self.policy {
            MotionPolicy::Bounce => {
                let size = self.size as f64;
                if self.x + size >= self.bounds.width() as f64 || self.x - size <= 0.0 {
                    self.vx = -self.vx;
                }
                if self.y + size >= self.bounds.height() as f64 || self.y - size <= 0.0 {
                    self.vy = -self.vy;
                }
                self.x += self.vx;
                self.y += self.vy;
            }
            MotionPolicy::RandomRespawn => {
                self.x = self.rng.next_f64() * self.bounds.width() as f64;
                self.y = self.rng.next_f64() * self.bounds.height() as f64;
            }
        }

        let moved = at != Point::new(self.x as i32, self.y as i32);
        let placement = Placement {
            at,
            sprite: Canvas::solid(self.size, self.color),
            prev: self.prev,
            moved,
        };
        self.prev = Some(Rect::new(at.x, at.y, self.size, self.size));
        Ok(placement)
    }
}
