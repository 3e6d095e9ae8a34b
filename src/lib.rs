//! rasteroids (workspace facade crate).
//!
//! This package keeps a stable `rasteroids::{types,raster,scene,sim,display,engine}`
//! public API while the implementation lives in dedicated crates under `crates/`.

pub mod config;

pub use rasteroids_display as display;
pub use rasteroids_engine as engine;
pub use rasteroids_raster as raster;
pub use rasteroids_scene as scene;
pub use rasteroids_sim as sim;
pub use rasteroids_types as types;
