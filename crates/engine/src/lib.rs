//! The repaint pipeline: a single consumer that owns the shared canvas and
//! the display, fed by any number of producers over a channel.

pub mod pacer;
pub mod pipeline;

pub use pacer::{FpsMeter, FramePacer};
pub use pipeline::{Pipeline, RepaintRequest};
