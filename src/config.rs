//! Command-line configuration for the demo binary.

use anyhow::{anyhow, Result};

use rasteroids_types::{DEFAULT_BODY_COUNT, DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Which scene the binary renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    /// Animated bouncing bodies (default).
    Asteroids,
    /// Static curve plot with a primitive sampler.
    Graph,
    /// Static sin(r)/r surface projection.
    Projection,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub scene: Scene,
    pub width: u32,
    pub height: u32,
    pub bodies: usize,
    pub seed: u32,
    /// Presentation cap in frames per second.
    pub fps: u64,
    pub respawn: bool,
    pub headless: bool,
    /// Simulated frame count for headless runs.
    pub ticks: u64,
}

impl Config {
    /// Presentation interval implied by the FPS cap.
    pub fn frame_interval_ms(&self) -> u64 {
        1000 / self.fps
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scene: Scene::Asteroids,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            bodies: DEFAULT_BODY_COUNT,
            seed: 1,
            fps: 30,
            respawn: false,
            headless: false,
            ticks: 300,
        }
    }
}

/// Parse the binary's arguments (`args` excludes the program name).
///
/// `rasteroids [asteroids|graph|projection] [--width N] [--height N]
/// [--bodies N] [--seed N] [--fps N] [--respawn] [--headless] [--ticks N]`
pub fn parse_args(args: &[String]) -> Result<Config> {
    let mut cfg = Config::default();

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "asteroids" if i == 0 => cfg.scene = Scene::Asteroids,
            "graph" if i == 0 => cfg.scene = Scene::Graph,
            "projection" if i == 0 => cfg.scene = Scene::Projection,
            "--width" => {
                i += 1;
                cfg.width = parse_value(args, i, "--width")?;
            }
            "--height" => {
                i += 1;
                cfg.height = parse_value(args, i, "--height")?;
            }
            "--bodies" => {
                i += 1;
                cfg.bodies = parse_value(args, i, "--bodies")?;
            }
            "--seed" => {
                i += 1;
                cfg.seed = parse_value(args, i, "--seed")?;
            }
            "--fps" => {
                i += 1;
                cfg.fps = parse_value(args, i, "--fps")?;
            }
            "--ticks" => {
                i += 1;
                cfg.ticks = parse_value(args, i, "--ticks")?;
            }
            "--respawn" => cfg.respawn = true,
            "--headless" => cfg.headless = true,
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }

    if cfg.width == 0 || cfg.height == 0 {
        return Err(anyhow!("--width and --height must be non-zero"));
    }
    if cfg.bodies == 0 && cfg.scene == Scene::Asteroids {
        return Err(anyhow!("--bodies must be non-zero for the asteroids scene"));
    }
    if cfg.fps == 0 || cfg.fps > 1000 {
        return Err(anyhow!("--fps must be in 1..=1000"));
    }

    Ok(cfg)
}

fn parse_value<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> Result<T> {
    let v = args
        .get(i)
        .ok_or_else(|| anyhow!("missing value for {}", flag))?;
    v.parse::<T>()
        .map_err(|_| anyhow!("invalid value for {}: {}", flag, v))
}
