//! Radially symmetric height field and its oblique grid projection.

use rasteroids_raster::{fill_convex_quad, line, Canvas};
use rasteroids_types::{Bounds, Color, Point};

const BACKGROUND: Color = Color::rgb(0x00, 0x11, 0x11);
const FACE: Color = Color::rgb(0xff, 0x55, 0x55);
const EDGE: Color = Color::rgb(0x66, 0x22, 0x22);

/// `sin(r) / r` with the removable singularity at the origin treated by its
/// limit, so `height(0, 0) == 1`.
pub fn height(x: f64, y: f64) -> f64 {
    let r = x.hypot(y);
    if r == 0.0 {
        1.0
    } else {
        r.sin() / r
    }
}

/// Oblique (isometric-like) projection of a square grid of height-field
/// samples onto the screen.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceProjection {
    width: f64,
    height: f64,
    cells: u32,
    xyrange: f64,
    xyscale: f64,
    zscale: f64,
    sin_a: f64,
    cos_a: f64,
}

impl SurfaceProjection {
    /// Projection for a canvas extent, with the fixed angle θ = π/6.
    pub fn new(bounds: Bounds) -> Self {
        let width = bounds.width() as f64;
        let height = bounds.height() as f64;
        let cells = 100;
        let xyrange = 30.0;
        let angle = std::f64::consts::PI / 6.0;
        Self {
            width,
            height,
            cells,
            xyrange,
            xyscale: width / 2.0 / xyrange,
            zscale: height * 0.4,
            sin_a: angle.sin(),
            cos_a: angle.cos(),
        }
    }

    pub fn cells(&self) -> u32 {
        self.cells
    }

    /// Screen position of grid corner `(i, j)`, or `None` when the
    /// projection is not finite.
    pub fn corner(&self, i: u32, j: u32) -> Option<(f64, f64)> {
        let x = self.xyrange * (i as f64 / self.cells as f64 - 0.5);
        let y = self.xyrange * (j as f64 / self.cells as f64 - 0.5);
        let z = height(x, y);

        let sx = self.width / 2.0 + (x - y) * self.cos_a * self.xyscale;
        let sy = self.height / 2.0 + (x + y) * self.sin_a * self.xyscale - z * self.zscale;

        if sx.is_finite() && sy.is_finite() {
            Some((sx, sy))
        } else {
            None
        }
    }

    /// Render the quad grid. A cell is drawn only when all four of its
    /// corners project to finite coordinates.
    pub fn render(&self, canvas: &mut Canvas) {
        canvas.clear(BACKGROUND);

        for i in 0..self.cells {
            for j in 0..self.cells {
                let (Some(a), Some(b), Some(c), Some(d)) = (
                    self.corner(i + 1, j),
                    self.corner(i, j),
                    self.corner(i, j + 1),
                    self.corner(i + 1, j + 1),
                ) else {
                    continue;
                };
                let a = Point::new(a.0.round() as i32, a.1.round() as i32);
                let b = Point::new(b.0.round() as i32, b.1.round() as i32);
                let c = Point::new(c.0.round() as i32, c.1.round() as i32);
                let d = Point::new(d.0.round() as i32, d.1.round() as i32);

                fill_convex_quad(canvas, FACE, a, b, c, d);
                line(canvas, a, b, EDGE);
                line(canvas, b, c, EDGE);
                line(canvas, c, d, EDGE);
                line(canvas, d, a, EDGE);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_at_origin_is_limit_value() {
        assert_eq!(height(0.0, 0.0), 1.0);
        assert!(!height(0.0, 0.0).is_nan());
    }

    #[test]
    fn height_decays_away_from_origin() {
        assert!(height(30.0, 0.0).abs() < 0.04);
    }

    #[test]
    fn center_corner_projects_finite() {
        let p = SurfaceProjection::new(Bounds::new(1800, 900));
        // (cells/2, cells/2) maps to x = y = 0, the r = 0 sample.
        let (sx, sy) = p.corner(50, 50).unwrap();
        assert!(sx.is_finite() && sy.is_finite());
    }

    #[test]
    fn all_corners_project_finite_for_default_grid() {
        let p = SurfaceProjection::new(Bounds::new(1800, 900));
        for i in 0..=p.cells() {
            for j in 0..=p.cells() {
                assert!(p.corner(i, j).is_some(), "corner ({}, {})", i, j);
            }
        }
    }

    #[test]
    fn render_leaves_face_pixels() {
        let p = SurfaceProjection::new(Bounds::new(1800, 900));
        let mut c = Canvas::new(1800, 900);
        p.render(&mut c);
        let mut counts = 0u32;
        for y in 0..900 {
            for x in 0..1800 {
                if c.get(x, y) == Some(FACE) {
                    counts += 1;
                }
            }
        }
        assert!(counts > 0);
    }
}
