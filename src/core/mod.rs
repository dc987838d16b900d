//! Core foundation: value types and the autodiff scalar.

pub mod jet;
pub mod types;

pub use jet::Jet3;
pub use types::{Mat3, Obstacle, Vec3};
