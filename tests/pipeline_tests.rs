//! Repaint pipeline: coalescing, ordering, and clear-then-composite.

use rasteroids::display::HeadlessDisplay;
use rasteroids::engine::{Pipeline, RepaintRequest};
use rasteroids::raster::Canvas;
use rasteroids::types::{Bounds, Color, Point, Rect, FRAME_INTERVAL_MS};

const BG: Color = Color::WHITE;

fn pipeline() -> Pipeline<HeadlessDisplay> {
    Pipeline::new(HeadlessDisplay::new(Bounds::new(200, 100)), BG)
}

fn patch_req(at: Point, color: Color, clear: Option<Rect>) -> RepaintRequest {
    let patch = Canvas::solid(4, color);
    let src = patch.bounds().as_rect();
    RepaintRequest::Composite {
        at,
        patch,
        src,
        clear,
    }
}

#[test]
fn burst_of_requests_coalesces_into_one_publish() {
    let mut p = pipeline();
    for i in 0..100 {
        p.apply(patch_req(Point::new(i, 0), Color::BLACK, None));
    }
    assert!(p.present_if_due(0).unwrap());
    assert_eq!(p.display().publishes(), 1);

    // Still inside the same interval: no further publish.
    assert!(!p.present_if_due(FRAME_INTERVAL_MS - 1).unwrap());
    assert_eq!(p.display().publishes(), 1);
}

#[test]
fn clean_frames_publish_nothing_but_pump_events() {
    let mut p = pipeline();
    assert!(p.present_if_due(0).unwrap());
    assert!(!p.present_if_due(FRAME_INTERVAL_MS).unwrap());
    assert_eq!(p.display().publishes(), 1);
    assert_eq!(p.display().pumps(), 1);
}

#[test]
fn composites_apply_in_receipt_order() {
    let mut p = pipeline();
    let red = Color::rgb(255, 0, 0);
    let blue = Color::rgb(0, 0, 255);
    p.apply(patch_req(Point::new(10, 10), red, None));
    p.apply(patch_req(Point::new(10, 10), blue, None));
    // Last writer wins on overlap.
    assert_eq!(p.canvas().get(10, 10), Some(blue));
}

#[test]
fn clear_restores_background_before_compositing() {
    let mut p = pipeline();
    p.apply(patch_req(Point::new(10, 10), Color::BLACK, None));
    assert_eq!(p.canvas().get(10, 10), Some(Color::BLACK));

    // The body moved: its old location is cleared back to background.
    p.apply(patch_req(
        Point::new(30, 10),
        Color::BLACK,
        Some(Rect::new(10, 10, 4, 4)),
    ));
    assert_eq!(p.canvas().get(10, 10), Some(BG));
    assert_eq!(p.canvas().get(30, 10), Some(Color::BLACK));
}

#[test]
fn translucent_patch_composites_over_background() {
    let mut p = pipeline();
    let half_black = Color::new(0, 0, 0, 128);
    p.apply(patch_req(Point::new(0, 0), half_black, None));
    let out = p.canvas().get(0, 0).unwrap();
    // White under 50% black lands mid-gray.
    assert!(out.r > 120 && out.r < 136, "got {out:?}");
}

#[test]
fn presents_track_the_frame_interval() {
    let mut p = pipeline();
    let mut publishes = 0;
    for t in 0..10u64 {
        p.apply(patch_req(Point::new(t as i32 * 5, 0), Color::BLACK, None));
        if p.present_if_due(t * 10).unwrap() {
            publishes += 1;
        }
    }
    // 100 ms of simulated time at a 33 ms interval: frames at t=0, 40, 80.
    assert_eq!(publishes, 3);
    assert_eq!(p.display().publishes(), 3);
}

#[test]
fn off_canvas_requests_are_harmless() {
    let mut p = pipeline();
    p.apply(patch_req(Point::new(-100, -100), Color::BLACK, None));
    p.apply(RepaintRequest::Present(Rect::new(500, 500, 10, 10)));
    // Nothing dirty inside the canvas: the due frame publishes only the
    // initial background frame.
    assert!(p.present_if_due(0).unwrap());
    assert!(!p.present_if_due(FRAME_INTERVAL_MS * 2).unwrap());
}

#[test]
fn run_exits_on_close_requested() {
    use rasteroids::display::DisplayEvent;
    use std::sync::mpsc;

    let mut display = HeadlessDisplay::new(Bounds::new(64, 64));
    display.push_event(DisplayEvent::CloseRequested);
    let pipeline = Pipeline::new(display, BG);
    let (tx, rx) = mpsc::channel::<RepaintRequest>();
    drop(tx);
    pipeline.run(rx).unwrap();
}

#[test]
fn many_dirty_rects_collapse_rather_than_drop() {
    let mut p = pipeline();
    for i in 0..200 {
        p.apply(patch_req(Point::new(i % 190, (i / 190) * 8), Color::BLACK, None));
    }
    assert!(p.present_if_due(0).unwrap());
    // Every composited pixel must be covered by some uploaded rect.
    let uploads = p.display().uploads().to_vec();
    let covered = |x: i32, y: i32| {
        uploads
            .iter()
            .any(|(_, r)| x >= r.x && x < r.right() && y >= r.y && y < r.bottom())
    };
    assert!(covered(0, 0));
    assert!(covered(189 + 3, 8 + 3));
}
