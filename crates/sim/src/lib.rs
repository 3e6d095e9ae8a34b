//! Simulation: seeded deterministic randomness and the animated bodies.
//!
//! Everything random flows from [`SimpleRng`], so a fixed seed reproduces
//! the exact same placement sequence run after run.

pub mod body;
pub mod rng;

pub use body::{Body, MotionPolicy, Placement, TickError};
pub use rng::SimpleRng;
