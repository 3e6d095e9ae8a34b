//! Static scene generation: coordinate scaling and the pure math that
//! drives the curve and surface demos.

pub mod curves;
pub mod graph;
pub mod scaler;
pub mod surface;

pub use curves::{htan, sigmoid};
pub use scaler::Scaler;
pub use surface::SurfaceProjection;
