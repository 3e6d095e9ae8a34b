//! Drawing primitives over a [`Canvas`].
//!
//! All primitives rely on the canvas clipping writes; callers never need to
//! pre-clip geometry.

use rasteroids_types::{Color, Point};

use crate::canvas::Canvas;

/// Draw a 1-pixel line by stepping the x-span.
///
/// Vertical and horizontal segments are pure axis loops. Everything else
/// steps the inclusive x-range between the smaller and larger x (endpoints
/// swapped when needed) and computes `y = slope * x + intercept`, setting
/// one pixel per integer x. Steep lines (|slope| > 1) may show gaps; that is
/// the contract of the single-axis stepper.
pub fn line(canvas: &mut Canvas, from: Point, to: Point, color: Color) {
    if from.x == to.x {
        let (y0, y1) = (from.y.min(to.y), from.y.max(to.y));
        for y in y0..=y1 {
            canvas.set(from.x, y, color);
        }
        return;
    }
    if from.y == to.y {
        let (x0, x1) = (from.x.min(to.x), from.x.max(to.x));
        for x in x0..=x1 {
            canvas.set(x, from.y, color);
        }
        return;
    }

    let (a, b) = if to.x < from.x { (to, from) } else { (from, to) };
    let slope = (b.y - a.y) as f64 / (b.x - a.x) as f64;
    let intercept = a.y as f64 - slope * a.x as f64;
    for x in a.x..=b.x {
        let y = (slope * x as f64 + intercept).round() as i32;
        canvas.set(x, y, color);
    }
}

/// Draw a circle outline of thickness ~1.
///
/// Scans the bounding box `[center - radius - 2, center + radius + 2]` and
/// sets pixels whose rounded distance from the center equals the radius.
/// O(radius²), fine for the small radii this renderer uses.
pub fn circle_outline(canvas: &mut Canvas, center: Point, radius: i32, color: Color) {
    scan_circle_box(canvas, center, radius, color, |d| d == radius);
}

/// Fill a disc: every pixel whose rounded center distance is <= radius.
///
/// Always a superset of [`circle_outline`] at the same radius.
pub fn filled_disc(canvas: &mut Canvas, center: Point, radius: i32, color: Color) {
    scan_circle_box(canvas, center, radius, color, |d| d <= radius);
}

fn scan_circle_box(
    canvas: &mut Canvas,
    center: Point,
    radius: i32,
    color: Color,
    keep: impl Fn(i32) -> bool,
) {
    for y in (center.y - radius - 2)..=(center.y + radius + 2) {
        for x in (center.x - radius - 2)..=(center.x + radius + 2) {
            let d = ((x - center.x) as f64).hypot((y - center.y) as f64);
            if keep(d.round() as i32) {
                canvas.set(x, y, color);
            }
        }
    }
}

/// Scanline-fill a convex quad given in vertex order.
///
/// For each row in the vertical extent, intersect the four edges and fill
/// between the leftmost and rightmost crossings. Degenerate (NaN) vertices
/// must be rejected by the caller before projecting into integer points.
pub fn fill_convex_quad(
    canvas: &mut Canvas,
    color: Color,
    p0: Point,
    p1: Point,
    p2: Point,
    p3: Point,
) {
    let pts = [p0, p1, p2, p3];
    let y_min = pts.iter().map(|p| p.y).min().unwrap_or(0);
    let y_max = pts.iter().map(|p| p.y).max().unwrap_or(0);

    for y in y_min..=y_max {
        let mut lo = i32::MAX;
        let mut hi = i32::MIN;
        for i in 0..4 {
            let a = pts[i];
            let b = pts[(i + 1) % 4];
            if y < a.y.min(b.y) || y > a.y.max(b.y) {
                continue;
            }
            if a.y == b.y {
                lo = lo.min(a.x.min(b.x));
                hi = hi.max(a.x.max(b.x));
            } else {
                let t = (y - a.y) as f64 / (b.y - a.y) as f64;
                let x = (a.x as f64 + t * (b.x - a.x) as f64).round() as i32;
                lo = lo.min(x);
                hi = hi.max(x);
            }
        }
        for x in lo..=hi {
            canvas.set(x, y, color);
        }
    }
}
