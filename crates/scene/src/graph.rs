//! The static graph scene: axes, htan and sigmoid traces, and a sampler of
//! the drawing primitives.

use rasteroids_raster::{circle_outline, filled_disc, line, Canvas};
use rasteroids_types::{Color, Point};

use crate::curves::{htan, sigmoid, trace};
use crate::scaler::Scaler;

const BACKGROUND: Color = Color::rgb(0x00, 0x11, 0x11);
const AXES: Color = Color::rgb(0x66, 0x66, 0x66);
const CURVE_A: Color = Color::rgb(0xff, 0x55, 0x55);
const CURVE_B: Color = Color::rgb(0x55, 0xff, 0x55);

const BORDER: i32 = 50;

/// Render the whole graph scene into `canvas`.
pub fn render(canvas: &mut Canvas) {
    let w = canvas.width() as i32;
    let h = canvas.height() as i32;

    canvas.clear(BACKGROUND);

    // Screen x <-> input value, input range inset by the border.
    let x_map = Scaler::new((BORDER) as f64, (w - BORDER) as f64, -10.0, 10.0);
    // Function value <-> screen y, flipped so +1 is at the top.
    let y_map = Scaler::new(-1.0, 1.0, (h - BORDER) as f64, BORDER as f64);

    // Axes: y = 0 across the full width, x = 0 down the full height.
    let y0 = y_map.scale(0.0).round() as i32;
    for ix in 0..w {
        canvas.set(ix, y0, AXES);
    }
    let x0 = x_map.invert(0.0).round() as i32;
    for iy in 0..h {
        canvas.set(x0, iy, AXES);
    }

    trace(canvas, htan, &x_map, &y_map, CURVE_A);
    trace(canvas, sigmoid, &x_map, &y_map, CURVE_B);

    // Primitive sampler: center-to-corner lines, an outline, a disc.
    let center = Point::new(w / 2, h / 2);
    line(canvas, center, Point::new(w, 0), Color::rgb(0xff, 0x00, 0x00));
    line(canvas, center, Point::new(w, h), Color::rgb(0x00, 0xff, 0x00));
    line(canvas, center, Point::new(0, 0), Color::rgb(0x00, 0x00, 0xff));
    line(canvas, center, Point::new(0, h), Color::WHITE);

    circle_outline(canvas, center, 60, Color::rgb(0xff, 0x00, 0x00));
    filled_disc(
        canvas,
        Point::new(w * 2 / 3, h * 7 / 10),
        60,
        Color::rgb(0x00, 0x33, 0x00),
    );
}
