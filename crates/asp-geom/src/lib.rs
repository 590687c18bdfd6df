#![warn(missing_docs)]

//! Planar geometry for the asp renderer.
//!
//! - [`Plane`] - ordered points with a lazily derived unit normal and plane equation
//! - [`Triangle`] - a plane constrained to exactly three vertices
//! - [`Scene`] - an immutable triangle list shared by every ray of a render

mod plane;
mod scene;

pub use plane::{Plane, PlaneCoefficients, Triangle};
pub use scene::Scene;
