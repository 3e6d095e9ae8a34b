//! Saturating curve functions and single-pixel curve tracing.

use rasteroids_raster::Canvas;
use rasteroids_types::Color;

use crate::scaler::Scaler;

/// Hyperbolic tangent, written out as `(e^2x - 1) / (e^2x + 1)`.
pub fn htan(x: f64) -> f64 {
    let e = (2.0 * x).exp();
    (e - 1.0) / (e + 1.0)
}

/// Logistic function `1 / (1 + e^-x)`.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Trace `f` across the canvas width as a single-pixel curve.
///
/// `x_map` maps screen x to the function's input space; `y_map` maps the
/// function's output back to screen y. One pixel per column; columns whose
/// mapped value lands off-canvas clip away naturally.
pub fn trace(canvas: &mut Canvas, f: impl Fn(f64) -> f64, x_map: &Scaler, y_map: &Scaler, color: Color) {
    for ix in 0..canvas.width() as i32 {
        let x = x_map.scale(ix as f64);
        let y = f(x);
        let iy = y_map.scale(y);
        if iy.is_finite() {
            canvas.set(ix, iy.round() as i32, color);
        }
    }
}
