//! Shared value types and constants.
//!
//! Pure data structures with no external dependencies, usable from any
//! context (rendering, simulation, display backends, tests).
//!
//! # Timing constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_INTERVAL_MS` | 33 | Presentation interval (~30 FPS cap) |
//! | `FPS_REPORT_INTERVAL_MS` | 1000 | Wall-clock window for FPS observations |

/// Presentation interval in milliseconds (~30 FPS cap).
pub const FRAME_INTERVAL_MS: u64 = 33;

/// Wall-clock window over which measured FPS is reported.
pub const FPS_REPORT_INTERVAL_MS: u64 = 1000;

/// Default window size.
pub const DEFAULT_WIDTH: u32 = 1200;
pub const DEFAULT_HEIGHT: u32 = 800;

/// Default number of animated bodies in the asteroids scene.
pub const DEFAULT_BODY_COUNT: usize = 30;

/// Immutable logical canvas extent.
///
/// Used both as the simulation arena and as the window/canvas size.
/// All pixel writes clip to `[0, width) x [0, height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    width: u32,
    height: u32,
}

impl Bounds {
    /// Create a new extent. Both dimensions must be non-zero.
    pub fn new(width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "Bounds must be non-zero");
        Self { width, height }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether a pixel coordinate falls inside the extent.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// The full extent as a rectangle anchored at the origin.
    pub fn as_rect(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }
}

/// Integer pixel coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned pixel rectangle, `w x h` anchored at `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// One past the rightmost column.
    pub fn right(&self) -> i32 {
        self.x + self.w as i32
    }

    /// One past the bottom row.
    pub fn bottom(&self) -> i32 {
        self.y + self.h as i32
    }

    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Smallest rectangle covering both `self` and `other`.
    pub fn union(&self, other: Rect) -> Rect {
        if self.is_empty() {
            return other;
        }
        if other.is_empty() {
            return *self;
        }
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let r = self.right().max(other.right());
        let b = self.bottom().max(other.bottom());
        Rect::new(x, y, (r - x) as u32, (b - y) as u32)
    }

    /// Intersection with another rectangle, `None` when disjoint.
    pub fn intersect(&self, other: Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let r = self.right().min(other.right());
        let b = self.bottom().min(other.bottom());
        if x < r && y < b {
            Some(Rect::new(x, y, (r - x) as u32, (b - y) as u32))
        } else {
            None
        }
    }
}

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

    /// Standard "over" compositing of `self` onto `dest`.
    ///
    /// An opaque source replaces the destination outright.
    pub fn over(&self, dest: Color) -> Color {
        if self.a == 0xff {
            return *self;
        }
        if self.a == 0 {
            return dest;
        }
        let sa = self.a as u32;
        let da = dest.a as u32;
        let inv = 255 - sa;
        let blend = |s: u8, d: u8| -> u8 {
            ((s as u32 * sa + d as u32 * inv + 127) / 255) as u8
        };
        Color {
            r: blend(self.r, dest.r),
            g: blend(self.g, dest.g),
            b: blend(self.b, dest.b),
            a: (sa + (da * inv + 127) / 255).min(255) as u8,
        }
    }

    /// Pack into `0x00RRGGBB`, the layout pixel-buffer windows expect.
    pub fn pack_0rgb(&self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_contains_clips_edges() {
        let b = Bounds::new(10, 5);
        assert!(b.contains(0, 0));
        assert!(b.contains(9, 4));
        assert!(!b.contains(10, 0));
        assert!(!b.contains(0, 5));
        assert!(!b.contains(-1, 0));
    }

    #[test]
    fn rect_union_covers_both() {
        let a = Rect::new(0, 0, 2, 2);
        let b = Rect::new(5, 5, 2, 2);
        let u = a.union(b);
        assert_eq!(u, Rect::new(0, 0, 7, 7));
    }

    #[test]
    fn rect_intersect_disjoint_is_none() {
        let a = Rect::new(0, 0, 2, 2);
        let b = Rect::new(5, 5, 2, 2);
        assert!(a.intersect(b).is_none());
        assert_eq!(a.intersect(Rect::new(1, 1, 4, 4)), Some(Rect::new(1, 1, 1, 1)));
    }

    #[test]
    fn opaque_over_replaces() {
        let red = Color::rgb(255, 0, 0);
        let blue = Color::rgb(0, 0, 255);
        assert_eq!(red.over(blue), red);
    }

    #[test]
    fn transparent_over_keeps_dest() {
        let clear = Color::new(10, 20, 30, 0);
        let blue = Color::rgb(0, 0, 255);
        assert_eq!(clear.over(blue), blue);
    }

    #[test]
    fn half_alpha_blends_toward_source() {
        let half_white = Color::new(255, 255, 255, 128);
        let out = half_white.over(Color::BLACK);
        assert!(out.r > 120 && out.r < 136);
        assert_eq!(out.a, 255);
    }

    #[test]
    fn pack_0rgb_layout() {
        assert_eq!(Color::rgb(0x12, 0x34, 0x56).pack_0rgb(), 0x0012_3456);
    }
}
