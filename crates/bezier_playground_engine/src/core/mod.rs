//! Core-Datenmodell: Kurven-Punktspeicher und Bounds-Policy.

mod bounds;
mod curve;

pub use bounds::BoundsPolicy;
pub use curve::{Axis, Curve, CurveDegree};
