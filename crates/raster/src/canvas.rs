//! RGBA8 pixel canvas.
//!
//! Row-major `Vec<u8>` storage, four bytes per pixel. Out-of-range
//! coordinates are dropped silently rather than reported, since clipping is
//! the normal fate of sprites near the arena edges.

use rasteroids_types::{Bounds, Color, Point, Rect};

/// 2D mutable RGBA pixel grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pix: Vec<u8>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        let len = (width as usize) * (height as usize) * 4;
        Self {
            width,
            height,
            pix: vec![0; len],
        }
    }

    pub fn from_bounds(bounds: Bounds) -> Self {
        Self::new(bounds.width(), bounds.height())
    }

    /// A solid `size x size` sprite, the patch an animated body composites.
    pub fn solid(size: u32, color: Color) -> Self {
        let mut c = Self::new(size, size);
        c.clear(color);
        c
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.width, self.height)
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(((y as usize) * (self.width as usize) + (x as usize)) * 4)
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        self.idx(x, y).map(|i| {
            Color::new(self.pix[i], self.pix[i + 1], self.pix[i + 2], self.pix[i + 3])
        })
    }

    /// Opaque overwrite of one pixel; out-of-bounds writes are dropped.
    pub fn set(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.idx(x, y) {
            self.pix[i] = color.r;
            self.pix[i + 1] = color.g;
            self.pix[i + 2] = color.b;
            self.pix[i + 3] = color.a;
        }
    }

    /// Fill the whole canvas with one color.
    pub fn clear(&mut self, color: Color) {
        for px in self.pix.chunks_exact_mut(4) {
            px[0] = color.r;
            px[1] = color.g;
            px[2] = color.b;
            px[3] = color.a;
        }
    }

    /// Opaque rectangle fill, clipped. Used for clears and solid sprites.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let Some(r) = rect.intersect(self.bounds().as_rect()) else {
            return;
        };
        for y in r.y..r.bottom() {
            for x in r.x..r.right() {
                self.set(x, y, color);
            }
        }
    }

    /// "Over"-composite `src` of `patch` into this canvas at `at`.
    ///
    /// Source pixels outside the patch or destination pixels outside the
    /// canvas are skipped.
    pub fn composite_over(&mut self, at: Point, patch: &Canvas, src: Rect) {
        let Some(src) = src.intersect(patch.bounds().as_rect()) else {
            return;
        };
        for sy in src.y..src.bottom() {
            for sx in src.x..src.right() {
                let Some(s) = patch.get(sx, sy) else { continue };
                let dx = at.x + (sx - src.x);
                let dy = at.y + (sy - src.y);
                if let Some(d) = self.get(dx, dy) {
                    self.set(dx, dy, s.over(d));
                }
            }
        }
    }

    /// Pack a sub-rectangle into an `0x00RRGGBB` buffer of the full canvas
    /// extent. `out` must hold `width * height` entries.
    pub fn pack_0rgb_into(&self, rect: Rect, out: &mut [u32]) {
        let Some(r) = rect.intersect(self.bounds().as_rect()) else {
            return;
        };
        let w = self.width as usize;
        for y in r.y..r.bottom() {
            for x in r.x..r.right() {
                let i = ((y as usize) * w + (x as usize)) * 4;
                out[(y as usize) * w + (x as usize)] = ((self.pix[i] as u32) << 16)
                    | ((self.pix[i + 1] as u32) << 8)
                    | self.pix[i + 2] as u32;
            }
        }
    }

    /// Raw RGBA bytes, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pix
    }
}
