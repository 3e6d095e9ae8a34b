//! rasteroids demo binary.
//!
//! Renders one of three scenes into an off-screen RGBA canvas and presents
//! it to a pixel-buffer window (or a headless display) at a bounded frame
//! rate. The asteroids scene runs one producer thread per body; the static
//! scenes draw once and then just pump events.

use std::sync::mpsc::{self, Sender};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use log::{info, warn};

use rasteroids::config::{self, Config, Scene};
use rasteroids::display::{Display, HeadlessDisplay, MinifbDisplay};
use rasteroids::engine::{Pipeline, RepaintRequest};
use rasteroids::scene::{graph, SurfaceProjection};
use rasteroids::sim::{Body, MotionPolicy, SimpleRng};
use rasteroids::types::{Bounds, Color};

const BACKGROUND: Color = Color::WHITE;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let cfg = config::parse_args(&args)?;

    if cfg.headless {
        run_headless(&cfg)
    } else {
        let bounds = Bounds::new(cfg.width, cfg.height);
        let display = MinifbDisplay::new("rasteroids", bounds)?;
        run(display, &cfg)
    }
}

fn run<D: Display>(display: D, cfg: &Config) -> Result<()> {
    let bounds = display.bounds();

    match cfg.scene {
        Scene::Graph => {
            let mut pipeline = Pipeline::with_interval(display, BACKGROUND, cfg.frame_interval_ms());
            graph::render(pipeline.canvas_mut());
            run_static(pipeline)
        }
        Scene::Projection => {
            let mut pipeline = Pipeline::with_interval(display, BACKGROUND, cfg.frame_interval_ms());
            SurfaceProjection::new(bounds).render(pipeline.canvas_mut());
            run_static(pipeline)
        }
        Scene::Asteroids => {
            let pipeline = Pipeline::with_interval(display, BACKGROUND, cfg.frame_interval_ms());
            let (tx, rx) = mpsc::channel();
            for body in spawn_bodies(bounds, cfg) {
                let tx = tx.clone();
                thread::spawn(move || produce(body, tx));
            }
            drop(tx);
            info!("animating {} bodies (seed {})", cfg.bodies, cfg.seed);
            pipeline.run(rx)
        }
    }
}

/// Present a pre-drawn canvas and keep handling events until close.
fn run_static<D: Display>(mut pipeline: Pipeline<D>) -> Result<()> {
    let full = pipeline.canvas().bounds().as_rect();
    pipeline.apply(RepaintRequest::Present(full));
    let (tx, rx) = mpsc::channel::<RepaintRequest>();
    drop(tx);
    pipeline.run(rx)
}

fn spawn_bodies(bounds: Bounds, cfg: &Config) -> Vec<Body> {
    let policy = if cfg.respawn {
        MotionPolicy::RandomRespawn
    } else {
        MotionPolicy::Bounce
    };
    let mut rng = SimpleRng::new(cfg.seed);
    (0..cfg.bodies)
        .map(|_| Body::random(bounds, policy, &mut rng))
        .collect()
}

/// Producer loop for one body: tick, send the placement, sleep.
///
/// A tick fault is logged and that frame skipped; the body keeps running.
/// The loop ends when the consumer hangs up the channel.
fn produce(mut body: Body, tx: Sender<RepaintRequest>) {
    let interval = Duration::from_millis(body.tick_interval_ms());
    loop {
        match body.tick() {
            Ok(p) => {
                if p.moved {
                    let src = p.sprite.bounds().as_rect();
                    let req = RepaintRequest::Composite {
                        at: p.at,
                        patch: p.sprite,
                        src,
                        clear: p.prev,
                    };
                    if tx.send(req).is_err() {
                        return;
                    }
                }
            }
            Err(e) => warn!("body tick skipped: {}", e.message()),
        }
        thread::sleep(interval);
    }
}

/// Deterministic, windowless run: tick every body once per frame interval
/// on the consumer's own control flow, then report what got published.
fn run_headless(cfg: &Config) -> Result<()> {
    let bounds = Bounds::new(cfg.width, cfg.height);
    let display = HeadlessDisplay::new(bounds);
    let mut pipeline = Pipeline::with_interval(display, BACKGROUND, cfg.frame_interval_ms());

    match cfg.scene {
        Scene::Graph => graph::render(pipeline.canvas_mut()),
        Scene::Projection => SurfaceProjection::new(bounds).render(pipeline.canvas_mut()),
        Scene::Asteroids => {}
    }

    let mut bodies = match cfg.scene {
        Scene::Asteroids => spawn_bodies(bounds, cfg),
        _ => Vec::new(),
    };

    for t in 0..cfg.ticks {
        for body in &mut bodies {
            match body.tick() {
                Ok(p) => {
                    let src = p.sprite.bounds().as_rect();
                    pipeline.apply(RepaintRequest::Composite {
                        at: p.at,
                        patch: p.sprite,
                        src,
                        clear: p.prev,
                    });
                }
                Err(e) => warn!("body tick skipped: {}", e.message()),
            }
        }
        pipeline.present_if_due(t * cfg.frame_interval_ms())?;
    }

    info!(
        "headless run: {} ticks, {} publish(es)",
        cfg.ticks,
        pipeline.display().publishes()
    );
    Ok(())
}
